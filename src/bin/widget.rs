//! chat-widget: line-mode chat against a running chat-relay
//!
//! Type a question and press Enter. `/upload <path>` sends a text file's
//! contents as the prompt, `/quit` exits.

use chat_relay::config::WidgetConfig;
use chat_relay::upload::read_text_upload;
use chat_relay::widget::{ChatClient, ConversationState, HttpForwardClient, Role, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    chat_relay::logging::init_compact();

    let config = WidgetConfig::from_env();
    tracing::info!(endpoint = %config.endpoint, "Starting chat widget");

    let client = ChatClient::new(HttpForwardClient::new(config.endpoint));
    let renderer = tokio::spawn(render(client.subscribe()));

    println!("Ask me anything!");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = if line.trim() == "/quit" {
            break;
        } else if let Some(path) = line.strip_prefix("/upload ") {
            match read_text_upload(path.trim()).await {
                Ok(text) => client.submit(text).await,
                Err(e) => {
                    eprintln!("{e}");
                    continue;
                }
            }
        } else {
            client.set_input(line);
            client.submit_input().await
        };

        if outcome == SubmitOutcome::Busy {
            eprintln!("Still waiting for the last answer");
        }
    }

    // Closing the channel lets the renderer print what is left, then exit
    drop(client);
    renderer.await?;
    Ok(())
}

/// Print each new message as the conversation changes
async fn render(mut rx: watch::Receiver<ConversationState>) {
    let mut shown = 0;
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        for message in state.messages().iter().skip(shown) {
            let who = match message.role() {
                Role::User => "you",
                Role::Bot => "bot",
            };
            println!("{who}> {}", message.text());
        }
        shown = state.messages().len();
        if state.status().is_pending() {
            println!("bot> ...");
        }
    }
}
