use anyhow::Result;
use violetta_application::ChatService;
use violetta_core::chat::{ChatMessage, ChatRole};

use super::{App, report_outcome};

fn print_message(message: &ChatMessage) {
    let who = match message.role {
        ChatRole::User => "You",
        ChatRole::Assistant => "Violetta",
    };
    println!("{}: {}", who, message.text);
}

pub async fn send(app: &App, text: &str) -> Result<()> {
    let service = ChatService::new(app.stores.chat.clone(), app.latency);
    println!("Violetta is typing...");
    let (_, reply) = service.send(text).await?;
    if let Some(outcome) = service.flush().await {
        report_outcome(outcome);
    }
    print_message(&reply);
    Ok(())
}

pub fn history(app: &App) {
    let service = ChatService::new(app.stores.chat.clone(), app.latency);
    for message in &service.history() {
        print_message(message);
    }
}

pub async fn clear(app: &App) {
    let service = ChatService::new(app.stores.chat.clone(), app.latency);
    service.clear().await;
    if let Some(outcome) = service.flush().await {
        report_outcome(outcome);
    }
    println!("🧹 Conversation cleared");
}
