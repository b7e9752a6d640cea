//! Portal state
//!
//! Owns the user store, the session slot, the verifier and the view model.
//! `FilePortal` is the instance wired to on-disk storage.

use log::info;

use crate::auth::{CredentialVerifier, SlotUserStore, UserStore, build_verifier};
use crate::config::{RuntimeConfig, StartupConfig};
use crate::error::{PortalError, StorageError};
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use crate::view::ViewModel;

/// The portal as run from the command line: users on disk, session in memory.
pub type FilePortal = Portal<SlotUserStore<FileStorage>, MemoryStorage>;

pub struct Portal<S, K> {
    pub(crate) store: S,
    pub(crate) session: K,
    pub(crate) session_key: String,
    pub(crate) verifier: Box<dyn CredentialVerifier>,
    pub(crate) view: ViewModel,
    pub(crate) runtime: RuntimeConfig,
}

impl<S: UserStore, K: KeyValueStorage> Portal<S, K> {
    pub fn new(
        store: S,
        session: K,
        session_key: impl Into<String>,
        verifier: Box<dyn CredentialVerifier>,
        runtime: RuntimeConfig,
    ) -> Self {
        let view = ViewModel::new(runtime.message_timeout());
        Self {
            store,
            session,
            session_key: session_key.into(),
            verifier,
            view,
            runtime,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewModel {
        &mut self.view
    }

    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Username recorded by the last successful login, if any
    pub fn current_user(&self) -> Result<Option<String>, StorageError> {
        self.session.get_item(&self.session_key)
    }
}

impl FilePortal {
    /// Opens the data directory and builds the configured verifier.
    pub fn from_config(startup: &StartupConfig, runtime: RuntimeConfig) -> Result<Self, PortalError> {
        let storage = FileStorage::open(startup.data_dir.clone())?;
        let store = SlotUserStore::new(storage, startup.users_key.clone());
        let verifier = build_verifier(startup.password_scheme, startup.bcrypt_cost);

        info!(
            "Portal ready: {} users in '{}' ({} passwords)",
            store.user_count()?,
            startup.users_key,
            startup.password_scheme
        );

        Ok(Portal::new(
            store,
            MemoryStorage::new(),
            startup.session_key.clone(),
            verifier,
            runtime,
        ))
    }
}
