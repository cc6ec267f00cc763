//! Breathing session engine, advanced one second per tick.

use serde::Serialize;
use strum::Display;

use super::model::BreathMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathStep {
    pub phase: BreathPhase,
    pub secs: u32,
}

/// One round of breathing. Zero-length steps are skipped when running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathPattern {
    steps: Vec<BreathStep>,
}

impl BreathPattern {
    pub fn new(steps: Vec<BreathStep>) -> Self {
        Self {
            steps: steps.into_iter().filter(|s| s.secs > 0).collect(),
        }
    }

    pub fn for_mode(mode: BreathMode) -> Self {
        use BreathPhase::*;
        let step = |phase, secs| BreathStep { phase, secs };
        match mode {
            BreathMode::Box44 => Self::new(vec![
                step(Inhale, 4),
                step(Hold, 4),
                step(Exhale, 4),
                step(Rest, 4),
            ]),
            BreathMode::FourSevenEight => {
                Self::new(vec![step(Inhale, 4), step(Hold, 7), step(Exhale, 8)])
            }
        }
    }

    pub fn steps(&self) -> &[BreathStep] {
        &self.steps
    }

    /// Length of one round in seconds.
    pub fn round_secs(&self) -> u32 {
        self.steps.iter().map(|s| s.secs).sum()
    }

    /// Rounds started within a session of `minutes`.
    pub fn rounds_for(&self, minutes: u32) -> u32 {
        let round = self.round_secs();
        if round == 0 {
            0
        } else {
            (minutes * 60).div_ceil(round)
        }
    }
}

/// What the screen shows for the current second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFrame {
    pub phase: BreathPhase,
    /// Seconds left in the current phase.
    pub phase_remaining: u32,
    pub phase_secs: u32,
    /// 1-based round counter.
    pub round: u32,
    /// Seconds left in the whole session.
    pub session_remaining: u32,
}

/// A running session of fixed total length.
#[derive(Debug, Clone)]
pub struct BreathingSession {
    pattern: BreathPattern,
    total_secs: u32,
    elapsed: u32,
}

impl BreathingSession {
    pub fn new(mode: BreathMode, minutes: u32) -> Self {
        Self::with_pattern(BreathPattern::for_mode(mode), minutes * 60)
    }

    pub fn with_pattern(pattern: BreathPattern, total_secs: u32) -> Self {
        Self {
            pattern,
            total_secs,
            elapsed: 0,
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.total_secs || self.pattern.round_secs() == 0
    }

    /// Fraction of the session completed, in 0.0..=1.0.
    pub fn progress(&self) -> f32 {
        if self.total_secs == 0 {
            return 1.0;
        }
        (self.elapsed as f32 / self.total_secs as f32).min(1.0)
    }

    /// The frame for the current second, or `None` once done.
    pub fn frame(&self) -> Option<SessionFrame> {
        if self.is_done() {
            return None;
        }
        let round_secs = self.pattern.round_secs();
        let mut offset = self.elapsed % round_secs;
        for step in self.pattern.steps() {
            if offset < step.secs {
                return Some(SessionFrame {
                    phase: step.phase,
                    phase_remaining: step.secs - offset,
                    phase_secs: step.secs,
                    round: self.elapsed / round_secs + 1,
                    session_remaining: self.total_secs - self.elapsed,
                });
            }
            offset -= step.secs;
        }
        None
    }

    /// Advances one second. Returns the new frame, or `None` when the
    /// session has just finished (or already had).
    pub fn tick(&mut self) -> Option<SessionFrame> {
        if !self.is_done() {
            self.elapsed += 1;
        }
        self.frame()
    }

    /// Stops and rewinds to the start.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}
