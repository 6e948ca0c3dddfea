//! Per-user gamification state (collection `progress`) and the pure
//! transitions applied to it.
//!
//! [`UserProgress::record_activity`] and [`UserProgress::record_completion`]
//! mutate a record in memory; loading, locking and persisting are the
//! engine's job.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::achievements::{award_crossed, COMPLETION_ACHIEVEMENTS, STREAK_ACHIEVEMENTS};
use crate::clock::Clock;
use crate::exercise::Exercise;
use crate::language::Language;
use crate::scoring;
use crate::streak::{self, StreakTransition};
use crate::types::{RecordId, Timestamp};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A badge held by a learner. Immutable once awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub date_earned: Timestamp,
}

/// Skill counters for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStats {
    #[serde(default)]
    pub vocabulary: u32,
    #[serde(default)]
    pub grammar: u32,
    #[serde(default)]
    pub listening: u32,
    #[serde(default)]
    pub speaking: u32,
}

impl AddAssign for SkillStats {
    fn add_assign(&mut self, rhs: Self) {
        self.vocabulary = self.vocabulary.saturating_add(rhs.vocabulary);
        self.grammar = self.grammar.saturating_add(rhs.grammar);
        self.listening = self.listening.saturating_add(rhs.listening);
        self.speaking = self.speaking.saturating_add(rhs.speaking);
    }
}

/// Gamification state for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: RecordId,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub last_activity_date: Option<Timestamp>,
    /// Completed exercise ids in completion order, each present once.
    #[serde(default)]
    pub completed_exercises: Vec<RecordId>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub language_stats: BTreeMap<Language, SkillStats>,
}

/// What a single streak update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub transition: StreakTransition,
    pub streak: u32,
    pub awarded: Vec<&'static str>,
}

/// What a first-time exercise completion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub points_awarded: u32,
    pub activity: ActivityOutcome,
    pub awarded: Vec<&'static str>,
}

impl UserProgress {
    /// Zero-valued progress for a user with no history.
    pub fn new(user_id: impl Into<RecordId>) -> Self {
        Self {
            user_id: user_id.into(),
            points: 0,
            streak: 0,
            last_activity_date: None,
            completed_exercises: Vec::new(),
            achievements: Vec::new(),
            language_stats: BTreeMap::new(),
        }
    }

    pub fn has_completed(&self, exercise_id: &str) -> bool {
        self.completed_exercises.iter().any(|id| id == exercise_id)
    }

    pub fn has_achievement(&self, achievement_id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == achievement_id)
    }

    pub fn completed_count(&self) -> u32 {
        u32::try_from(self.completed_exercises.len()).unwrap_or(u32::MAX)
    }

    /// Count an activity happening now: advance the streak, stamp the
    /// activity time and award any streak badges crossed.
    pub fn record_activity(&mut self, clock: &dyn Clock) -> ActivityOutcome {
        let now = clock.now();
        let today = clock.local_date(now);
        let last = self.last_activity_date.map(|t| clock.local_date(t));

        let transition = streak::transition(last, today);
        self.streak = streak::next_streak(self.streak, last, today);
        self.last_activity_date = Some(now);

        let awarded = award_crossed(&mut self.achievements, STREAK_ACHIEVEMENTS, self.streak, now);

        ActivityOutcome {
            transition,
            streak: self.streak,
            awarded,
        }
    }

    /// Credit a completed exercise. Returns `None`, leaving the record
    /// untouched, if the exercise was already credited.
    pub fn record_completion(
        &mut self,
        exercise: &Exercise,
        clock: &dyn Clock,
    ) -> Option<CompletionOutcome> {
        if self.has_completed(&exercise.id) {
            return None;
        }

        self.completed_exercises.push(exercise.id.clone());

        let points_awarded = scoring::points_for(exercise);
        self.points = self.points.saturating_add(u64::from(points_awarded));

        *self.language_stats.entry(exercise.language).or_default() +=
            scoring::skill_gain(&exercise.content);

        let activity = self.record_activity(clock);

        let completed = self.completed_count();
        let awarded = award_crossed(
            &mut self.achievements,
            COMPLETION_ACHIEVEMENTS,
            completed,
            clock.now(),
        );

        Some(CompletionOutcome {
            points_awarded,
            activity,
            awarded,
        })
    }
}
