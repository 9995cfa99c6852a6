//! Console chat adapter.
//!
//! The thin prompt/response loop around the chat engine: prints the
//! banner, reads one line per turn from stdin, recognizes the exit
//! phrases, and labels every reply line. All conversational decisions
//! live behind `ChatEngine`.

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::application::ChatEngine;

/// Greeting printed once at startup.
pub const BANNER: &str = "Hi there! Want to book a table, ask a question, \
                          or just have a casual chat? Let me know how I can assist you today!.";

/// Phrases that end the conversation when they occur anywhere in the
/// lowercased input.
const EXIT_PHRASES: [&str; 3] = ["exit", "quit", "bye"];

/// Terminal front end for one chat session.
pub struct ConsoleChat {
    engine: ChatEngine,
}

impl ConsoleChat {
    /// Creates a console front end over a ready chat engine.
    pub fn new(engine: ChatEngine) -> Self {
        Self { engine }
    }

    /// Runs the prompt/response loop until an exit phrase arrives or
    /// stdin closes.
    pub async fn run(mut self) -> io::Result<()> {
        let mut input_lines = BufReader::new(io::stdin()).lines();
        let mut stdout = io::stdout();

        say(&mut stdout, BANNER).await?;
        loop {
            stdout.write_all(b"You: ").await?;
            stdout.flush().await?;

            let Some(line) = input_lines.next_line().await? else {
                break;
            };
            if is_exit(&line) {
                say(&mut stdout, "Goodbye!").await?;
                break;
            }

            match self.engine.handle_turn(&line) {
                Ok(replies) => {
                    for reply in replies {
                        say(&mut stdout, &reply).await?;
                    }
                }
                Err(err) => {
                    // The engine drops finished dialogues, so an error
                    // here signals a bug rather than bad user input.
                    warn!(error = %err, "turn failed");
                }
            }
        }
        Ok(())
    }
}

async fn say(stdout: &mut io::Stdout, line: &str) -> io::Result<()> {
    stdout
        .write_all(format!("Chatbot: {}\n", line).as_bytes())
        .await?;
    stdout.flush().await
}

fn is_exit(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
