use std::time::Duration;

use violetta_core::datetime::now_iso;
use violetta_core::exercise::{BreathMode, BreathingSession};

use super::{App, report_outcome};

pub fn set_mode(app: &App, mode: BreathMode) {
    let (_, outcome) = app.stores.exercises.mutate(|s| s.set_mode(mode));
    report_outcome(outcome);
    println!("🌬️  Breathing mode set to {}", mode);
}

pub fn set_minutes(app: &App, minutes: i64) {
    let (stored, outcome) = app.stores.exercises.mutate(|s| {
        s.set_minutes(minutes);
        s.session_minutes
    });
    report_outcome(outcome);
    println!("⏱️  Sessions last {} minutes", stored);
}

pub fn done(app: &App) {
    let (_, outcome) = app.stores.exercises.mutate(|s| s.mark_completed(now_iso()));
    report_outcome(outcome);
    println!("✅ Session recorded");
}

pub fn show(app: &App) {
    let state = app.stores.exercises.state();
    println!("Mode:     {}", state.breath_mode);
    println!("Minutes:  {}", state.session_minutes);
    match state.last_completed_iso {
        Some(at) => println!("Last run: {}", at),
        None => println!("Last run: never"),
    }
}

/// Runs a session in real time, one line per phase. Ctrl-C stops early
/// without recording the session.
pub async fn run(app: &App) {
    let state = app.stores.exercises.state();
    let mut session = BreathingSession::new(state.breath_mode, state.session_minutes);
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;

    let mut last_phase = None;
    if let Some(frame) = session.frame() {
        println!("Round {}: {} for {}s", frame.round, frame.phase, frame.phase_secs);
        last_phase = Some((frame.round, frame.phase));
    }

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                println!("\nStopped after {}s", session.elapsed());
                return;
            }
        }
        match session.tick() {
            Some(frame) => {
                if last_phase != Some((frame.round, frame.phase)) {
                    println!("Round {}: {} for {}s", frame.round, frame.phase, frame.phase_secs);
                    last_phase = Some((frame.round, frame.phase));
                }
            }
            None => break,
        }
    }

    done(app);
}
