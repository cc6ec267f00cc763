use violetta_core::onboarding::{Frequency, OnboardingGoal, Reminder};

use super::{App, report_outcome};

pub fn set(
    app: &App,
    goal: Option<OnboardingGoal>,
    frequency: Option<Frequency>,
    reminder: Option<Reminder>,
) {
    let (complete, outcome) = app.stores.onboarding.mutate(|s| {
        if goal.is_some() {
            s.set_goal(goal);
        }
        if frequency.is_some() {
            s.set_frequency(frequency);
        }
        if reminder.is_some() {
            s.set_reminder(reminder);
        }
        s.is_complete()
    });
    report_outcome(outcome);
    if complete {
        println!("✅ All set. Finish with `violetta login onboarded`.");
    } else {
        println!("Saved. Still missing some answers, see `violetta onboarding show`.");
    }
}

pub fn show(app: &App) {
    let answers = app.stores.onboarding.state();
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    println!("Goal:      {}", or_dash(answers.goal.map(|g| g.to_string())));
    println!("Frequency: {}", or_dash(answers.frequency.map(|f| f.to_string())));
    println!("Reminder:  {}", or_dash(answers.reminder.map(|r| r.to_string())));
}

pub fn reset(app: &App) {
    let (_, outcome) = app.stores.onboarding.mutate(|s| s.reset());
    report_outcome(outcome);
    println!("🧹 Onboarding answers cleared");
}
