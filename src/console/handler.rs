use log::{debug, error, info};
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::UserStore;
use crate::portal::Portal;
use crate::protocol::responses::GREETING;
use crate::protocol::{CommandData, CommandStatus, handle_command, parse_command};
use crate::storage::KeyValueStorage;

/// Runs the console until `QUIT` or end of input.
///
/// - Reads one line at a time from `reader`.
/// - Dispatches commands using `handle_command`.
/// - Waits out the redirect delay after a successful login before
///   announcing the redirect.
pub async fn run_console<R, W, S, K>(
    mut reader: R,
    mut writer: W,
    portal: &mut Portal<S, K>,
    max_command_length: usize,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: UserStore,
    K: KeyValueStorage,
{
    let mut line = String::new();

    writer.write_all(GREETING.as_bytes()).await?;
    writer.flush().await?;

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => {
                info!("Console input closed");
                break;
            }
            Ok(_) => {
                // Enforce command length limit
                if line.trim_end_matches(['\r', '\n']).len() > max_command_length {
                    writer.write_all(b"[error] Command too long\n").await?;
                    writer.flush().await?;
                    continue;
                }

                let command = parse_command(&line);
                debug!("Received command {}", command.name());

                let result = handle_command(portal, &command, Instant::now());

                if let Some(msg) = &result.message {
                    writer.write_all(msg.as_bytes()).await?;
                    writer.flush().await?;
                }

                if let Some(CommandData::Redirect(redirect)) = &result.data {
                    tokio::time::sleep(redirect.delay).await;
                    info!("Redirecting to {}", redirect.target);
                    writer
                        .write_all(format!("Redirecting to {}\n", redirect.target).as_bytes())
                        .await?;
                    writer.flush().await?;
                }

                match result.status {
                    CommandStatus::CloseConnection => {
                        info!("Console session ended by user");
                        break;
                    }
                    CommandStatus::Failure(reason) => debug!("{} failed: {}", command.name(), reason),
                    CommandStatus::Success => {}
                }
            }
            Err(e) => {
                error!("Failed to read console input: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{PlaintextVerifier, SlotUserStore};
    use crate::config::RuntimeConfig;
    use crate::storage::MemoryStorage;
    use tokio::io::BufReader;

    fn portal() -> Portal<SlotUserStore<MemoryStorage>, MemoryStorage> {
        Portal::new(
            SlotUserStore::new(MemoryStorage::new(), "localUsersDB"),
            MemoryStorage::new(),
            "currentUsername",
            Box::new(PlaintextVerifier),
            RuntimeConfig {
                redirect_delay_ms: 0,
                ..RuntimeConfig::default()
            },
        )
    }

    async fn transcript(input: &str, max_command_length: usize) -> String {
        let mut portal = portal();
        let mut output = Vec::new();
        run_console(
            BufReader::new(input.as_bytes()),
            &mut output,
            &mut portal,
            max_command_length,
        )
        .await
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn login_flow_announces_redirect() {
        let out = transcript("REGISTER Alice pw\nLOGIN alice pw\nQUIT\n", 512).await;
        assert!(out.starts_with(GREETING));
        assert!(out.contains("[success] Registration successful! You can now login.\n"));
        assert!(out.contains("[success] Login successful!\nRedirecting to index.html\n"));
        assert!(out.ends_with("Goodbye\n"));
    }

    #[tokio::test]
    async fn stops_at_quit() {
        let out = transcript("QUIT\nREGISTER late pw\n", 512).await;
        assert!(!out.contains("Registration successful"));
    }

    #[tokio::test]
    async fn rejects_long_lines_and_continues() {
        let long = format!("LOGIN {}\nWHOAMI\n", "x".repeat(64));
        let out = transcript(&long, 32).await;
        assert!(out.contains("[error] Command too long\n"));
        assert!(out.contains("Not logged in\n"));
    }

    #[tokio::test]
    async fn ends_cleanly_without_quit() {
        let out = transcript("LOGIN nobody pw", 512).await;
        assert!(out.contains("[error] User 'nobody' not found. Asking for registration details.\n"));
    }
}
