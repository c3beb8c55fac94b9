//! Interactive read-send-print loop.

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{api::ChatApiClient, config::ClientConfig, error::ClientError};

const PROMPT: &str = "you> ";

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line, nothing to send
    Empty,
    /// `/quit` or `/exit`
    Quit,
    /// Trimmed message text
    Message(String),
}

/// Classify one line of input.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Empty,
        "/quit" | "/exit" => Input::Quit,
        _ => Input::Message(trimmed.to_string()),
    }
}

/// Render the server's reply for the terminal.
pub fn format_reply(text: &str) -> String {
    format!("bot: {}", text)
}

/// Run the interactive client until the user quits.
///
/// # Errors
///
/// Returns an error only if the terminal cannot be read; failed requests are
/// reported and the session continues.
pub async fn run(config: &ClientConfig) -> Result<(), ClientError> {
    let client = ChatApiClient::new(config.url.clone());
    let handle = tokio::runtime::Handle::current();

    // rustyline blocks, so the whole loop lives on the blocking pool
    tokio::task::spawn_blocking(move || read_loop(&client, &handle)).await?
}

fn read_loop(client: &ChatApiClient, handle: &tokio::runtime::Handle) -> Result<(), ClientError> {
    let mut editor = DefaultEditor::new()?;

    println!("Connected to {}. Type /quit to exit.", client.base_url());

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let text = match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Message(text) => text,
        };

        if let Err(e) = editor.add_history_entry(text.as_str()) {
            tracing::debug!("Failed to add history entry: {}", e);
        }

        match handle.block_on(client.send_chat(&text)) {
            Ok(reply) => println!("{}", format_reply(&reply)),
            Err(e) => {
                tracing::warn!("Failed to send message: {}", e);
                eprintln!("error: {}", e);
            }
        }
    }

    println!("Bye!");
    Ok(())
}
