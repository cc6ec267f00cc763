use violetta_application::HelpMessageService;
use violetta_core::help::NAME_PLACEHOLDER;

use super::{App, report_outcome};

fn service(app: &App) -> HelpMessageService {
    HelpMessageService::new(app.stores.help_message.clone(), app.stores.emergency.clone())
}

pub fn show(app: &App) {
    let service = service(app);
    println!("Template: {}", service.template());
    match service.for_primary_contact() {
        Some(message) => println!("\nTo {}:\n{}", message.contact.name, message.text),
        None => println!("\nAdd a contact to send this message."),
    }
}

pub fn set(app: &App, text: &str) {
    let outcome = service(app).set_template(text);
    report_outcome(outcome);
    if text.trim().is_empty() {
        println!("Template restored to the default");
    } else if !text.contains(NAME_PLACEHOLDER) {
        println!("Saved. Tip: {} is replaced with the contact's name.", NAME_PLACEHOLDER);
    } else {
        println!("✅ Template saved");
    }
}
