use anyhow::Result;
use violetta_application::{AuthFlow, PhoneChannel, Provider, RouteAccess};

use super::{App, report_outcome};

fn flow(app: &App) -> AuthFlow {
    AuthFlow::new(app.stores.session.clone(), app.latency)
}

pub async fn email(app: &App, email: &str) -> Result<()> {
    let (sent_to, outcome) = flow(app).start_email_login(email).await?;
    report_outcome(outcome);
    println!("📧 We sent a code to {}. Enter it with `violetta login code <code>`.", sent_to);
    Ok(())
}

pub async fn phone(app: &App, phone: &str, channel: PhoneChannel) -> Result<()> {
    let (sent_to, outcome) = flow(app).start_phone_login(phone, channel).await?;
    report_outcome(outcome);
    println!("📱 We sent a code by {} to {}.", channel, sent_to);
    Ok(())
}

pub async fn code(app: &App, code: &str) -> Result<()> {
    let (session, outcome) = flow(app).verify_code(code).await?;
    report_outcome(outcome);
    println!("✅ Welcome, {}", session.display_name());
    Ok(())
}

pub async fn register(app: &App, name: &str, email: Option<&str>) -> Result<()> {
    let (session, outcome) = flow(app).register(name, email).await?;
    report_outcome(outcome);
    println!("✅ Account created for {}", session.display_name());
    println!("Next: set your goals with `violetta onboarding set`.");
    Ok(())
}

pub async fn provider(app: &App, provider: Provider) {
    let (session, outcome) = flow(app).register_with_provider(provider).await;
    report_outcome(outcome);
    println!("✅ Signed up with {} as {}", provider, session.display_name());
}

pub fn onboarded(app: &App) -> Result<()> {
    let (signed_in, outcome) = flow(app).complete_onboarding();
    if !signed_in {
        anyhow::bail!("Nobody is signed in");
    }
    report_outcome(outcome);
    println!("🎉 Onboarding complete");
    Ok(())
}

pub fn logout(app: &App) {
    report_outcome(flow(app).logout());
    println!("👋 Signed out");
}

pub fn status(app: &App) {
    let session = flow(app).current();
    match &session {
        Some(s) => {
            println!("Signed in as {}", s.display_name());
            if let Some(email) = &s.user_email {
                println!("  email: {}", email);
            }
            if let Some(phone) = &s.user_phone {
                println!("  phone: {}", phone);
            }
            println!("  onboarding done: {}", s.has_completed_onboarding);
        }
        None => println!("Not signed in"),
    }
    println!("Home screen: {}", RouteAccess::landing_path(session.as_ref()));
}
