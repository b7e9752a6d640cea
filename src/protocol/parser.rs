//! Command parser
//!
//! Verbs are case-insensitive. `LOGIN` and `REGISTER` read the password as a
//! single whitespace-delimited token; `SET password` keeps the rest of the
//! line verbatim for passwords containing spaces.

use super::commands::Command;

/// Parses one raw input line into a [`Command`].
///
/// Known verbs with unusable arguments parse as [`Command::Unknown`] carrying
/// the verb, so the caller can print the matching usage line.
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };
    let verb = verb.to_ascii_uppercase();

    match verb.as_str() {
        "LOGIN" => parse_login(rest),
        "REGISTER" | "REG" => parse_register(rest),
        "SHOW" => match rest.trim().parse() {
            Ok(view) => Command::Show(view),
            Err(_) => Command::Unknown(verb),
        },
        "SET" => parse_set(rest),
        "SUBMIT" => Command::Submit,
        "STATUS" => Command::Status,
        "USERS" => Command::Users,
        "WHOAMI" => Command::Whoami,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(verb),
    }
}

/// `LOGIN <username> [password]`; one token each, like `REGISTER`.
fn parse_login(rest: &str) -> Command {
    let mut parts = rest.split_whitespace();
    let username = parts.next().unwrap_or("");
    let password = parts.next().unwrap_or("");

    if username.is_empty() || parts.next().is_some() {
        return Command::Unknown("LOGIN".into());
    }

    Command::Login {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// `REGISTER [username] [password] [email]`; missing values stay empty so the
/// portal reports them.
fn parse_register(rest: &str) -> Command {
    let mut parts = rest.split_whitespace();
    let username = parts.next().unwrap_or("").to_string();
    let password = parts.next().unwrap_or("").to_string();
    let email = parts.next().map(str::to_string);

    if parts.next().is_some() {
        return Command::Unknown("REGISTER".into());
    }

    Command::Register {
        username,
        password,
        email,
    }
}

/// `SET <field> [value...]`; an empty value clears the field.
fn parse_set(rest: &str) -> Command {
    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value),
        None => (rest, ""),
    };

    match field.parse() {
        Ok(field) => Command::Set(field, value.to_string()),
        Err(_) => Command::Unknown("SET".into()),
    }
}
