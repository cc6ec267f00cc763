//! Answers collected during onboarding.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::keys;
use crate::persist::PersistedState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OnboardingGoal {
    Mood,
    Stress,
    Sleep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Frequency {
    #[serde(rename = "daily")]
    #[strum(serialize = "daily")]
    Daily,
    #[serde(rename = "3week")]
    #[strum(serialize = "3week")]
    ThreePerWeek,
    #[serde(rename = "1week")]
    #[strum(serialize = "1week")]
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Reminder {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    #[serde(default)]
    pub goal: Option<OnboardingGoal>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub reminder: Option<Reminder>,
}

impl OnboardingAnswers {
    pub fn set_goal(&mut self, goal: Option<OnboardingGoal>) {
        self.goal = goal;
    }

    pub fn set_frequency(&mut self, frequency: Option<Frequency>) {
        self.frequency = frequency;
    }

    pub fn set_reminder(&mut self, reminder: Option<Reminder>) {
        self.reminder = reminder;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.goal.is_some() && self.frequency.is_some() && self.reminder.is_some()
    }
}

impl PersistedState for OnboardingAnswers {
    const KEY: &'static str = keys::ONBOARDING;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self::default()
    }
}
