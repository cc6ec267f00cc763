use violetta_application::{CheckInFlow, FollowUp, HelpMessageService, NextAction};
use violetta_core::checkin::{Boundary, BoundaryType, CheckInContext, CheckInDraft, MoodFlow, Safety};

use super::{App, report_outcome};

pub fn record(
    app: &App,
    mood: Option<String>,
    context: Option<CheckInContext>,
    boundary: Boundary,
    boundary_types: Vec<BoundaryType>,
    safety: Option<Safety>,
    next: NextAction,
) {
    let flow = CheckInFlow::new(app.stores.checkins.clone());
    let draft = CheckInDraft {
        mood: mood.filter(|m| !m.trim().is_empty()),
        context,
        boundary,
        boundary_types,
        safety,
        ..CheckInDraft::default()
    };
    let recorded = flow.record(draft, next);
    report_outcome(recorded.outcome);

    match recorded.check_in.fields.mood_flow() {
        Some(MoodFlow::Positive) => println!("💜 Glad to hear it. Check-in saved."),
        Some(MoodFlow::Neutral) => println!("💜 Thanks for checking in."),
        Some(MoodFlow::Negative) => println!("💜 Thank you for sharing how you feel."),
        None => println!("💜 Check-in saved."),
    }

    match recorded.follow_up {
        FollowUp::RiskSupport => {
            println!("\n🛟 What you described matters. You don't have to handle it alone.");
            let help = HelpMessageService::new(
                app.stores.help_message.clone(),
                app.stores.emergency.clone(),
            );
            if let Some(message) = help.for_primary_contact() {
                println!("   Message for {}:", message.contact.name);
                println!("   \"{}\"", message.text);
            }
            println!("   See `violetta contact list` for your emergency contacts and resources.");
        }
        FollowUp::Journal => println!("📝 Write about it with `violetta journal add`."),
        FollowUp::Help => println!("🛟 See `violetta contact list` for people and resources."),
        FollowUp::None => {}
    }
}

pub fn list(app: &App) {
    let flow = CheckInFlow::new(app.stores.checkins.clone());
    let history = flow.history();
    if history.is_empty() {
        println!("No check-ins yet.");
        return;
    }
    for check_in in &history {
        let fields = &check_in.fields;
        let mood = fields.mood.as_deref().unwrap_or("-");
        let context = fields
            .context
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let flag = if check_in.needs_risk_support() { " 🛟" } else { "" };
        println!(
            "{} mood={} context={} boundary={}{}",
            fields.timestamp, mood, context, fields.boundary, flag
        );
    }
}
