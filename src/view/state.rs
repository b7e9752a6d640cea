//! Form state
//!
//! `LoginView` and `RegisterView` are the only two states. User-initiated
//! toggles clear the message line; outcome-driven switches keep the message
//! that explains them.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use super::message::{Message, Tone};

/// Which form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    LoginView,
    RegisterView,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::LoginView => write!(f, "login"),
            ViewState::RegisterView => write!(f, "register"),
        }
    }
}

impl FromStr for ViewState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "login" => Ok(ViewState::LoginView),
            "register" | "registration" => Ok(ViewState::RegisterView),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}

/// An input field of either form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Password,
    Email,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "username" | "user" => Ok(FormField::Username),
            "password" | "pass" => Ok(FormField::Password),
            "email" => Ok(FormField::Email),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegisterForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Page state driven by the portal handlers
#[derive(Debug, Clone)]
pub struct ViewModel {
    state: ViewState,
    login: LoginForm,
    register: RegisterForm,
    message: Option<Message>,
    message_timeout: Duration,
}

impl ViewModel {
    pub fn new(message_timeout: Duration) -> Self {
        Self {
            state: ViewState::default(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            message: None,
            message_timeout,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// User asked for the registration form
    pub fn show_register(&mut self) {
        self.state = ViewState::RegisterView;
        self.message = None;
    }

    /// User asked for the login form
    pub fn show_login(&mut self) {
        self.state = ViewState::LoginView;
        self.message = None;
    }

    /// User-initiated toggle to `state`
    pub fn show(&mut self, state: ViewState) {
        match state {
            ViewState::LoginView => self.show_login(),
            ViewState::RegisterView => self.show_register(),
        }
    }

    /// Outcome-driven switch; the current message stays.
    pub fn switch_to(&mut self, state: ViewState) {
        self.state = state;
    }

    pub fn show_message(&mut self, text: impl Into<String>, tone: Tone, now: Instant) {
        self.message = Some(Message::new(text, tone, now, self.message_timeout));
    }

    /// The message, while it is still visible at `now`
    pub fn current_message(&self, now: Instant) -> Option<&Message> {
        self.message.as_ref().filter(|m| m.is_visible(now))
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn register_form(&self) -> &RegisterForm {
        &self.register
    }

    pub fn register_form_mut(&mut self) -> &mut RegisterForm {
        &mut self.register
    }

    /// Sets a field of the active form. Returns `false` if the active form has
    /// no such field (the login form has no email).
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let value = value.into();
        match (self.state, field) {
            (ViewState::LoginView, FormField::Username) => self.login.username = value,
            (ViewState::LoginView, FormField::Password) => self.login.password = value,
            (ViewState::LoginView, FormField::Email) => return false,
            (ViewState::RegisterView, FormField::Username) => self.register.username = value,
            (ViewState::RegisterView, FormField::Password) => self.register.password = value,
            (ViewState::RegisterView, FormField::Email) => self.register.email = value,
        }
        true
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000))
    }
}
