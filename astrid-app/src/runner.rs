//! Interactive chat loop on stdin/stdout. Reads lines, hands them to the
//! session, prints the assistant entries. Logs go to the file only so they
//! never interleave with the conversation.

use anyhow::Result;
use astrid_core::{AstridError, ChatMessage};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::{sleep, Duration};
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::session::ChatSession;

const QUIT_COMMAND: &str = "/quit";

/// Runs the chat until EOF or `/quit`. The session, and with it the
/// transcript and context, is dropped on return.
#[instrument(skip(config), fields(user_id = %config.user_id))]
pub async fn run_chat(config: &AppConfig) -> Result<()> {
    let mut session = ChatSession::new(&config.user_id);
    info!("Chat session opened");

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    print_entry(&mut stdout, &session.transcript()[0]).await?;
    prompt(&mut stdout).await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim() == QUIT_COMMAND {
            break;
        }

        let appended = session.submit(&line);

        // Cosmetic only; classification already happened above.
        if !appended.is_empty() && config.typing_delay_ms > 0 {
            sleep(Duration::from_millis(config.typing_delay_ms)).await;
        }

        for entry in &appended {
            print_entry(&mut stdout, entry).await?;
        }
        prompt(&mut stdout).await?;
    }

    info!(
        user_messages = session.user_message_count(),
        "Chat session closed"
    );
    stdout.write_all(b"Take care!\n").await?;
    Ok(())
}

async fn print_entry(
    stdout: &mut io::Stdout,
    entry: &ChatMessage,
) -> std::result::Result<(), AstridError> {
    let mut out = format!("astrid> {}\n", entry.text);
    if !entry.tips.is_empty() {
        out.push_str("        Some things that might help:\n");
        for tip in &entry.tips {
            out.push_str(&format!("        - {}\n", tip));
        }
    }
    stdout.write_all(out.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

async fn prompt(stdout: &mut io::Stdout) -> std::result::Result<(), AstridError> {
    stdout.write_all(b"you> ").await?;
    stdout.flush().await?;
    Ok(())
}
