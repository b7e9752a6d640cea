//! Command handlers
//!
//! Dispatches console commands to the portal and renders the outcome.

use std::time::Instant;

use crate::auth::UserStore;
use crate::error::PortalError;
use crate::error::handlers::{error_to_message, handle_error};
use crate::portal::{Portal, SubmitResult, SubmitStatus};
use crate::protocol::responses::{GOODBYE, HELP, format_message, format_status, usage};
use crate::protocol::{Command, CommandData, CommandResult, CommandStatus};
use crate::storage::KeyValueStorage;
use crate::view::{FormField, Tone, ViewState};

/// Dispatches a parsed command to its handler.
pub fn handle_command<S: UserStore, K: KeyValueStorage>(
    portal: &mut Portal<S, K>,
    command: &Command,
    now: Instant,
) -> CommandResult {
    match command {
        Command::Login { username, password } => handle_cmd_login(portal, username, password, now),
        Command::Register {
            username,
            password,
            email,
        } => handle_cmd_register(portal, username, password, email.as_deref(), now),
        Command::Show(view) => handle_cmd_show(portal, *view),
        Command::Set(field, value) => handle_cmd_set(portal, *field, value),
        Command::Submit => submit_to_result(portal.submit(now)),
        Command::Status => CommandResult::success(format_status(portal.view(), now)),
        Command::Users => handle_cmd_users(portal),
        Command::Whoami => handle_cmd_whoami(portal),
        Command::Help => CommandResult::success(HELP),
        Command::Quit => CommandResult {
            status: CommandStatus::CloseConnection,
            message: Some(GOODBYE.into()),
            data: None,
        },
        Command::Unknown(verb) => CommandResult::failure("Unknown command", usage(verb)),
    }
}

/// Shows the login form, fills it, and submits it.
fn handle_cmd_login<S: UserStore, K: KeyValueStorage>(
    portal: &mut Portal<S, K>,
    username: &str,
    password: &str,
    now: Instant,
) -> CommandResult {
    let view = portal.view_mut();
    view.show_login();
    view.set_field(FormField::Username, username);
    view.set_field(FormField::Password, password);

    submit_to_result(portal.submit_login(now))
}

/// Shows the registration form, fills it, and submits it.
fn handle_cmd_register<S: UserStore, K: KeyValueStorage>(
    portal: &mut Portal<S, K>,
    username: &str,
    password: &str,
    email: Option<&str>,
    now: Instant,
) -> CommandResult {
    let view = portal.view_mut();
    view.show_register();
    view.set_field(FormField::Username, username);
    view.set_field(FormField::Password, password);
    view.set_field(FormField::Email, email.unwrap_or(""));

    submit_to_result(portal.submit_register(now))
}

fn handle_cmd_show<S: UserStore, K: KeyValueStorage>(
    portal: &mut Portal<S, K>,
    view: ViewState,
) -> CommandResult {
    portal.view_mut().show(view);
    CommandResult::success(format!("Showing {} form\n", view))
}

fn handle_cmd_set<S: UserStore, K: KeyValueStorage>(
    portal: &mut Portal<S, K>,
    field: FormField,
    value: &str,
) -> CommandResult {
    if portal.view_mut().set_field(field, value) {
        CommandResult::success("OK\n")
    } else {
        CommandResult::failure(
            "Field not on active form",
            format!("The {} form has no such field\n", portal.view().state()),
        )
    }
}

fn handle_cmd_users<S: UserStore, K: KeyValueStorage>(portal: &Portal<S, K>) -> CommandResult {
    match portal.store().usernames() {
        Ok(names) if names.is_empty() => CommandResult::success("No registered users\n"),
        Ok(names) => {
            CommandResult::success(format!("{} users: {}\n", names.len(), names.join(", ")))
        }
        Err(e) => storage_failure(e.into()),
    }
}

fn handle_cmd_whoami<S: UserStore, K: KeyValueStorage>(portal: &Portal<S, K>) -> CommandResult {
    match portal.current_user() {
        Ok(Some(username)) => CommandResult::success(format!("Logged in as {}\n", username)),
        Ok(None) => CommandResult::success("Not logged in\n"),
        Err(e) => storage_failure(e.into()),
    }
}

fn storage_failure(err: PortalError) -> CommandResult {
    handle_error(&err);
    let text = error_to_message(&err);
    CommandResult::failure(err.to_string(), format_message(Tone::Error, &text))
}

/// Converts a form submit into a console result; a login success carries its
/// redirect.
fn submit_to_result(result: SubmitResult) -> CommandResult {
    let message = Some(format_message(result.tone, &result.message));
    match result.status {
        SubmitStatus::Rejected => CommandResult {
            status: CommandStatus::Failure(result.message),
            message,
            data: None,
        },
        SubmitStatus::Registered { .. } => CommandResult {
            status: CommandStatus::Success,
            message,
            data: None,
        },
        SubmitStatus::LoggedIn { redirect, .. } => CommandResult {
            status: CommandStatus::Success,
            message,
            data: Some(CommandData::Redirect(redirect)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{PlaintextVerifier, SlotUserStore};
    use crate::config::RuntimeConfig;
    use crate::protocol::parse_command;
    use crate::storage::MemoryStorage;

    fn portal() -> Portal<SlotUserStore<MemoryStorage>, MemoryStorage> {
        Portal::new(
            SlotUserStore::new(MemoryStorage::new(), "localUsersDB"),
            MemoryStorage::new(),
            "currentUsername",
            Box::new(PlaintextVerifier),
            RuntimeConfig::default(),
        )
    }

    fn run(portal: &mut Portal<SlotUserStore<MemoryStorage>, MemoryStorage>, line: &str) -> CommandResult {
        handle_command(portal, &parse_command(line), Instant::now())
    }

    #[test]
    fn register_then_login_redirects() {
        let mut portal = portal();
        let result = run(&mut portal, "REGISTER Alice pw");
        assert_eq!(result.status, CommandStatus::Success);
        assert_eq!(
            result.message.as_deref(),
            Some("[success] Registration successful! You can now login.\n")
        );

        let result = run(&mut portal, "LOGIN alice pw");
        assert!(matches!(
            result.data,
            Some(CommandData::Redirect(ref r)) if r.target == "index.html"
        ));

        let result = run(&mut portal, "WHOAMI");
        assert_eq!(result.message.as_deref(), Some("Logged in as Alice\n"));
    }

    #[test]
    fn register_and_login_read_password_alike() {
        let mut portal = portal();
        run(&mut portal, "REGISTER carol pw c@example.com");

        let result = run(&mut portal, "LOGIN carol pw ");
        assert_eq!(result.status, CommandStatus::Success);
        assert!(result.data.is_some());

        // Extra tokens are refused rather than folded into the password
        let result = run(&mut portal, "LOGIN carol two words");
        assert!(matches!(result.status, CommandStatus::Failure(_)));
        assert!(result.message.unwrap_or_default().contains("SET password"));
    }

    #[test]
    fn duplicate_registration_warns() {
        let mut portal = portal();
        run(&mut portal, "REGISTER alice pw");
        let result = run(&mut portal, "REGISTER ALICE other");
        assert!(matches!(result.status, CommandStatus::Failure(_)));
        assert_eq!(
            result.message.as_deref(),
            Some("[warning] User already exists. Please login.\n")
        );
    }

    #[test]
    fn set_and_submit_use_active_form() {
        let mut portal = portal();
        run(&mut portal, "SHOW REGISTER");
        run(&mut portal, "SET username bob");
        run(&mut portal, "SET password two words");
        run(&mut portal, "SET email b@example.com");
        let result = run(&mut portal, "SUBMIT");
        assert_eq!(result.status, CommandStatus::Success);

        // Registration carries the username over to the login form
        run(&mut portal, "SET password two words");
        let result = run(&mut portal, "SUBMIT");
        assert!(result.data.is_some());

        let status = run(&mut portal, "STATUS").message.unwrap_or_default();
        assert!(status.contains("view: login"));
        assert!(status.contains("password: *********"));
        assert!(!status.contains("two words"));
    }

    #[test]
    fn email_is_not_a_login_field() {
        let mut portal = portal();
        let result = run(&mut portal, "SET email x@example.com");
        assert!(matches!(result.status, CommandStatus::Failure(_)));
    }

    #[test]
    fn users_lists_registrations() {
        let mut portal = portal();
        assert_eq!(
            run(&mut portal, "USERS").message.as_deref(),
            Some("No registered users\n")
        );
        run(&mut portal, "REGISTER b pw");
        run(&mut portal, "REGISTER a pw");
        assert_eq!(
            run(&mut portal, "USERS").message.as_deref(),
            Some("2 users: b, a\n")
        );
    }

    #[test]
    fn quit_closes() {
        let mut portal = portal();
        assert_eq!(run(&mut portal, "QUIT").status, CommandStatus::CloseConnection);
    }
}
