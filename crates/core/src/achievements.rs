//! Achievement catalog and threshold evaluation.
//!
//! Two independent tables: consecutive-day streaks and total completed
//! exercises. Evaluation walks a table in ascending threshold order and
//! appends every crossed badge the learner does not hold yet, so several
//! badges can be earned by one call.

use serde::Serialize;

use crate::progress::Achievement;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Metric an achievement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Streak,
    Completion,
}

/// Static definition of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub kind: AchievementKind,
    pub threshold: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl AchievementDef {
    /// Materialize this badge as earned at `now`.
    pub fn earn(&self, now: Timestamp) -> Achievement {
        Achievement {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            date_earned: now,
        }
    }
}

/// Streak badges, ascending by threshold.
pub const STREAK_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "streak3",
        kind: AchievementKind::Streak,
        threshold: 3,
        title: "3-Day Streak",
        description: "Practiced for 3 days in a row",
        icon: "streak_3.png",
    },
    AchievementDef {
        id: "streak7",
        kind: AchievementKind::Streak,
        threshold: 7,
        title: "Weekly Warrior",
        description: "Practiced for a full week without missing a day",
        icon: "streak_7.png",
    },
    AchievementDef {
        id: "streak30",
        kind: AchievementKind::Streak,
        threshold: 30,
        title: "Monthly Master",
        description: "Practiced every day for a month",
        icon: "streak_30.png",
    },
];

/// Completion-count badges, ascending by threshold.
pub const COMPLETION_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "firstex",
        kind: AchievementKind::Completion,
        threshold: 1,
        title: "First Steps",
        description: "Completed your first exercise",
        icon: "first_exercise.png",
    },
    AchievementDef {
        id: "tenex",
        kind: AchievementKind::Completion,
        threshold: 10,
        title: "Getting Serious",
        description: "Completed 10 exercises",
        icon: "ten_exercises.png",
    },
    AchievementDef {
        id: "fiftyex",
        kind: AchievementKind::Completion,
        threshold: 50,
        title: "Language Enthusiast",
        description: "Completed 50 exercises",
        icon: "fifty_exercises.png",
    },
];

/// Every defined badge, streaks first.
pub fn catalog() -> impl Iterator<Item = &'static AchievementDef> {
    STREAK_ACHIEVEMENTS.iter().chain(COMPLETION_ACHIEVEMENTS)
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Append every badge in `table` whose threshold is at most `metric` and
/// which `earned` does not already contain. Returns the newly awarded ids.
///
/// Existing entries are never touched, so a later drop in `metric` keeps
/// badges already earned.
pub fn award_crossed(
    earned: &mut Vec<Achievement>,
    table: &[AchievementDef],
    metric: u32,
    now: Timestamp,
) -> Vec<&'static str> {
    let mut awarded = Vec::new();

    for def in table.iter().filter(|d| d.threshold <= metric) {
        if earned.iter().any(|a| a.id == def.id) {
            continue;
        }
        earned.push(def.earn(now));
        awarded.push(def.id);
    }

    awarded
}
