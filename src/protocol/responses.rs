//! Console response formatting

use std::time::Instant;

use crate::view::{Tone, ViewModel, ViewState};

pub const GREETING: &str = "Login form ready. Type HELP for commands.\n";
pub const GOODBYE: &str = "Goodbye\n";

pub const HELP: &str = "\
Commands:
  LOGIN <username> [password]
  REGISTER <username> <password> [email]
  SHOW LOGIN | SHOW REGISTER
  SET <username|password|email> [value]
  SUBMIT
  STATUS
  USERS
  WHOAMI
  QUIT
Passwords with spaces: SHOW the form, SET password <value>, then SUBMIT.
";

const SPACED_PASSWORD_HINT: &str = "For a password with spaces use SET password <value>, then SUBMIT\n";

/// Format a portal message line
pub fn format_message(tone: Tone, text: &str) -> String {
    format!("[{}] {}\n", tone, text)
}

/// Usage line for a known verb, or the full help for anything else
pub fn usage(verb: &str) -> String {
    match verb {
        "LOGIN" => format!("Usage: LOGIN <username> [password]\n{}", SPACED_PASSWORD_HINT),
        "REGISTER" => format!(
            "Usage: REGISTER <username> <password> [email]\n{}",
            SPACED_PASSWORD_HINT
        ),
        "SHOW" => "Usage: SHOW LOGIN | SHOW REGISTER\n".to_string(),
        "SET" => "Usage: SET <username|password|email> [value]\n".to_string(),
        _ => format!("Unknown command\n{}", HELP),
    }
}

/// Password shown as one `*` per character
pub fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}

/// Snapshot of the active form
pub fn format_status(view: &ViewModel, now: Instant) -> String {
    let mut out = format!("view: {}\n", view.state());
    match view.state() {
        ViewState::LoginView => {
            let form = view.login_form();
            out.push_str(&format!("username: {}\n", form.username));
            out.push_str(&format!("password: {}\n", mask(&form.password)));
        }
        ViewState::RegisterView => {
            let form = view.register_form();
            out.push_str(&format!("username: {}\n", form.username));
            out.push_str(&format!("password: {}\n", mask(&form.password)));
            out.push_str(&format!("email: {}\n", form.email));
        }
    }
    if let Some(message) = view.current_message(now) {
        out.push_str(&format!("message: {}\n", message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_by_character() {
        assert_eq!(mask("pässword"), "********");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn usage_falls_back_to_help() {
        assert!(usage("SET").starts_with("Usage: SET"));
        assert!(usage("LOGIN").contains("SET password"));
        assert!(usage("DANCE").contains("REGISTER <username>"));
    }
}
