//! Form submit handlers
//!
//! Each submit is one load, check, save sequence run to completion.

use log::info;
use std::time::Instant;

use super::core::Portal;
use super::results::{Redirect, SubmitResult, SubmitStatus};
use crate::auth::validator::{authenticate, find_by_username, register};
use crate::auth::{NewUser, UserRecord, UserStore};
use crate::error::handlers::{error_to_message, error_to_tone, handle_error};
use crate::error::{AuthError, PortalError};
use crate::storage::KeyValueStorage;
use crate::view::{Tone, ViewState};

const REGISTERED_MESSAGE: &str = "Registration successful! You can now login.";
const LOGGED_IN_MESSAGE: &str = "Login successful!";

impl<S: UserStore, K: KeyValueStorage> Portal<S, K> {
    /// Registers a user from raw form values.
    ///
    /// Username and email are trimmed; the password is taken as typed.
    pub fn register_user(
        &mut self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<(), PortalError> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let records = self.store.load()?;

        // Checked before hashing; `register` enforces it again.
        if let Some(existing) = find_by_username(&records, username) {
            return Err(AuthError::DuplicateUser(existing.username().to_string()).into());
        }

        let candidate = NewUser {
            username: username.to_string(),
            password: self.verifier.protect(password)?,
            email: Some(email.to_string()).filter(|e| !e.is_empty()),
        };
        let records = register(records, candidate)?;
        self.store.save(&records)?;

        info!("Registered user '{}' ({} total)", username, records.len());
        Ok(())
    }

    /// Checks credentials and records the session marker on success.
    pub fn login_user(&mut self, username: &str, password: &str) -> Result<UserRecord, PortalError> {
        let username = username.trim();
        let records = self.store.load()?;

        let user = authenticate(&records, username, password, self.verifier.as_ref())
            .into_result(username)?;

        self.session.set_item(&self.session_key, user.username())?;
        info!("User '{}' logged in", user.username());
        Ok(user)
    }

    /// Submits whichever form is showing.
    pub fn submit(&mut self, now: Instant) -> SubmitResult {
        match self.view.state() {
            ViewState::LoginView => self.submit_login(now),
            ViewState::RegisterView => self.submit_register(now),
        }
    }

    /// Submits the registration form.
    ///
    /// On success the new username is carried over to the login form, the
    /// registration fields are cleared, and the login form is shown.
    pub fn submit_register(&mut self, now: Instant) -> SubmitResult {
        let form = self.view.register_form().clone();

        match self.register_user(&form.username, &form.password, &form.email) {
            Ok(()) => {
                let username = form.username.trim().to_string();
                self.view.show_message(REGISTERED_MESSAGE, Tone::Success, now);
                self.view.login_form_mut().username = username.clone();
                self.view.register_form_mut().clear();
                self.view.switch_to(ViewState::LoginView);

                SubmitResult {
                    status: SubmitStatus::Registered { username },
                    message: REGISTERED_MESSAGE.to_string(),
                    tone: Tone::Success,
                }
            }
            Err(e) => self.reject(&e, now),
        }
    }

    /// Submits the login form.
    ///
    /// An unknown username moves the submitted values into the registration
    /// form and shows it.
    pub fn submit_login(&mut self, now: Instant) -> SubmitResult {
        let form = self.view.login_form().clone();

        match self.login_user(&form.username, &form.password) {
            Ok(user) => {
                self.view.show_message(LOGGED_IN_MESSAGE, Tone::Success, now);
                SubmitResult {
                    status: SubmitStatus::LoggedIn {
                        username: user.username().to_string(),
                        redirect: Redirect {
                            target: self.runtime.redirect_target.clone(),
                            delay: self.runtime.redirect_delay(),
                        },
                    },
                    message: LOGGED_IN_MESSAGE.to_string(),
                    tone: Tone::Success,
                }
            }
            Err(e) => {
                let result = self.reject(&e, now);
                if let PortalError::Auth(AuthError::NotFound(username)) = &e {
                    let registration = self.view.register_form_mut();
                    registration.username = username.clone();
                    registration.password = form.password;
                    self.view.switch_to(ViewState::RegisterView);
                }
                result
            }
        }
    }

    fn reject(&mut self, err: &PortalError, now: Instant) -> SubmitResult {
        handle_error(err);
        let message = error_to_message(err);
        let tone = error_to_tone(err);
        self.view.show_message(message.clone(), tone, now);

        SubmitResult {
            status: SubmitStatus::Rejected,
            message,
            tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{BcryptVerifier, PlaintextVerifier, SlotUserStore};
    use crate::config::RuntimeConfig;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;
    use crate::view::RegisterForm;
    use std::time::Duration;

    type TestPortal = Portal<SlotUserStore<MemoryStorage>, MemoryStorage>;

    fn portal() -> TestPortal {
        Portal::new(
            SlotUserStore::new(MemoryStorage::new(), "localUsersDB"),
            MemoryStorage::new(),
            "currentUsername",
            Box::new(PlaintextVerifier),
            RuntimeConfig::default(),
        )
    }

    /// A store whose writes always fail
    struct ReadOnlyStore;

    impl UserStore for ReadOnlyStore {
        fn load(&self) -> Result<Vec<UserRecord>, StorageError> {
            Ok(Vec::new())
        }

        fn save(&mut self, _records: &[UserRecord]) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn register_then_login_any_case() {
        let mut portal = portal();
        portal.register_user("Alice", "pw", "").unwrap();

        let user = portal.login_user("alice", "pw").unwrap();
        assert_eq!(user.username(), "Alice");
        assert_eq!(portal.current_user().unwrap().as_deref(), Some("Alice"));
    }

    #[test]
    fn register_trims_username_and_email_only() {
        let mut portal = portal();
        portal.register_user("  carol ", " pw ", "  c@example.com ").unwrap();

        let records = portal.store().load().unwrap();
        assert_eq!(records[0].username(), "carol");
        assert_eq!(records[0].password(), " pw ");
        assert_eq!(records[0].email(), Some("c@example.com"));
    }

    #[test]
    fn missing_credentials() {
        let mut portal = portal();
        for (u, p) in [("", "pw"), ("   ", "pw"), ("dave", "")] {
            assert!(matches!(
                portal.register_user(u, p, ""),
                Err(PortalError::Auth(AuthError::MissingCredentials))
            ));
        }
        assert_eq!(portal.store().user_count().unwrap(), 0);
    }

    #[test]
    fn duplicate_leaves_store_unchanged() {
        let mut portal = portal();
        portal.register_user("alice", "pw", "").unwrap();
        assert!(matches!(
            portal.register_user("ALICE", "other", ""),
            Err(PortalError::Auth(AuthError::DuplicateUser(_)))
        ));
        assert_eq!(portal.store().user_count().unwrap(), 1);
        assert!(portal.login_user("alice", "pw").is_ok());
    }

    #[test]
    fn failed_logins_leave_no_session() {
        let mut portal = portal();
        portal.register_user("alice", "pw", "").unwrap();

        assert!(matches!(
            portal.login_user("alice", "wrong"),
            Err(PortalError::Auth(AuthError::WrongPassword(_)))
        ));
        assert!(matches!(
            portal.login_user("bob", "x"),
            Err(PortalError::Auth(AuthError::NotFound(_)))
        ));
        assert_eq!(portal.current_user().unwrap(), None);
    }

    #[test]
    fn submit_register_switches_to_prefilled_login() {
        let now = Instant::now();
        let mut portal = portal();
        portal.view_mut().show_register();
        {
            let form = portal.view_mut().register_form_mut();
            form.username = " erin ".into();
            form.password = "pw".into();
            form.email = "e@example.com".into();
        }

        let result = portal.submit(now);
        assert_eq!(
            result.status,
            SubmitStatus::Registered {
                username: "erin".into()
            }
        );
        assert_eq!(portal.view().state(), ViewState::LoginView);
        assert_eq!(portal.view().login_form().username, "erin");
        assert_eq!(portal.view().register_form(), &RegisterForm::default());
        assert_eq!(
            portal.view().current_message(now).map(|m| m.text()),
            Some(REGISTERED_MESSAGE)
        );
    }

    #[test]
    fn submit_login_unknown_user_prefills_registration() {
        let now = Instant::now();
        let mut portal = portal();
        portal.view_mut().login_form_mut().username = " frank ".into();
        portal.view_mut().login_form_mut().password = "secret".into();

        let result = portal.submit(now);
        assert!(result.is_rejected());
        assert_eq!(result.tone, Tone::Error);
        assert_eq!(
            result.message,
            "User 'frank' not found. Asking for registration details."
        );
        assert_eq!(portal.view().state(), ViewState::RegisterView);
        assert_eq!(portal.view().register_form().username, "frank");
        assert_eq!(portal.view().register_form().password, "secret");
        assert!(portal.view().current_message(now).is_some());
    }

    #[test]
    fn submit_login_success_requests_redirect() {
        let now = Instant::now();
        let mut portal = portal();
        portal.register_user("Grace", "pw", "").unwrap();
        portal.view_mut().login_form_mut().username = "GRACE".into();
        portal.view_mut().login_form_mut().password = "pw".into();

        let result = portal.submit(now);
        assert_eq!(
            result.status,
            SubmitStatus::LoggedIn {
                username: "Grace".into(),
                redirect: Redirect {
                    target: "index.html".into(),
                    delay: Duration::from_millis(1000),
                },
            }
        );
        assert_eq!(portal.view().state(), ViewState::LoginView);
    }

    #[test]
    fn submit_login_wrong_password_stays_put() {
        let now = Instant::now();
        let mut portal = portal();
        portal.register_user("heidi", "pw", "").unwrap();
        portal.view_mut().login_form_mut().username = "heidi".into();
        portal.view_mut().login_form_mut().password = "nope".into();

        let result = portal.submit(now);
        assert_eq!(result.message, "Wrong password. Please try again.");
        assert_eq!(portal.view().state(), ViewState::LoginView);
    }

    #[test]
    fn save_failure_is_reported() {
        let now = Instant::now();
        let mut portal = Portal::new(
            ReadOnlyStore,
            MemoryStorage::new(),
            "currentUsername",
            Box::new(PlaintextVerifier),
            RuntimeConfig::default(),
        );
        portal.view_mut().show_register();
        portal.view_mut().register_form_mut().username = "ivan".into();
        portal.view_mut().register_form_mut().password = "pw".into();

        let result = portal.submit(now);
        assert!(result.is_rejected());
        assert_eq!(result.tone, Tone::Error);
        assert_eq!(portal.view().state(), ViewState::RegisterView);
        assert_eq!(portal.view().register_form().username, "ivan");
    }

    #[test]
    fn bcrypt_portal_stores_hashes() {
        let mut portal = Portal::new(
            SlotUserStore::new(MemoryStorage::new(), "localUsersDB"),
            MemoryStorage::new(),
            "currentUsername",
            Box::new(BcryptVerifier::new(4)),
            RuntimeConfig::default(),
        );
        portal.register_user("judy", "pw", "").unwrap();

        let stored = portal.store().load().unwrap();
        assert_ne!(stored[0].password(), "pw");
        assert!(portal.login_user("Judy", "pw").is_ok());
        assert!(portal.login_user("judy", "PW").is_err());
    }
}
