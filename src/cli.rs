use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::services::conversation;
use crate::state::AppState;

const PROMPT: &str = "Siz: ";
const FAILURE_REPLY: &str =
    "Üzgünüm, şu anda teknik bir sorun yaşıyorum. Lütfen daha sonra tekrar deneyin.";

/// Interactive chat loop on stdin. The literal input `exit` (any case) quits.
pub async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let session_id = uuid::Uuid::new_v4().to_string();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_prompt()?;
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            print_prompt()?;
            continue;
        }

        match conversation::process_turn(&state, &session_id, input).await {
            Ok(reply) => println!("Bot: {reply}"),
            Err(e) => {
                tracing::error!(error = %e, "turn failed");
                println!("Bot: {FAILURE_REPLY}");
            }
        }
        print_prompt()?;
    }

    Ok(())
}

fn print_prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()
}
