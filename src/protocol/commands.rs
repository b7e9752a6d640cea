//! Module `commands`
//!
//! Defines the console commands and the result of executing one.

use crate::portal::Redirect;
use crate::view::{FormField, ViewState};

/// A console command parsed from one input line.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Fill the login form and submit it
    Login { username: String, password: String },
    /// Fill the registration form and submit it
    Register {
        username: String,
        password: String,
        email: Option<String>,
    },
    Show(ViewState),
    Set(FormField, String),
    Submit,
    Status,
    Users,
    Whoami,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Command verb, safe to log (never includes arguments)
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "LOGIN",
            Command::Register { .. } => "REGISTER",
            Command::Show(_) => "SHOW",
            Command::Set(..) => "SET",
            Command::Submit => "SUBMIT",
            Command::Status => "STATUS",
            Command::Users => "USERS",
            Command::Whoami => "WHOAMI",
            Command::Help => "HELP",
            Command::Quit => "QUIT",
            Command::Unknown(_) => "UNKNOWN",
        }
    }
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Additional data associated with a command result.
#[derive(Debug, PartialEq)]
pub enum CommandData {
    Redirect(Redirect),
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
    pub data: Option<CommandData>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn failure(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message.into()),
            data: None,
        }
    }
}
