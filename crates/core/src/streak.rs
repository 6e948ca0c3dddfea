//! Day-granularity streak state machine.

use chrono::NaiveDate;

/// How a new activity relates to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// No previous activity.
    Started,
    /// Previous activity was yesterday.
    Extended,
    /// Previous activity was today.
    Unchanged,
    /// A day or more was skipped.
    Reset,
    /// Previous activity is dated after today (clock skew or backdating).
    Backdated,
}

/// Classify an activity on `today` given the date of the last one.
pub fn transition(last: Option<NaiveDate>, today: NaiveDate) -> StreakTransition {
    let Some(last) = last else {
        return StreakTransition::Started;
    };

    match (today - last).num_days() {
        0 => StreakTransition::Unchanged,
        1 => StreakTransition::Extended,
        d if d < 0 => StreakTransition::Backdated,
        _ => StreakTransition::Reset,
    }
}

/// Streak value after an activity on `today`.
///
/// Backdated activity restarts the streak at 1, the same as a gap.
pub fn next_streak(current: u32, last: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match transition(last, today) {
        StreakTransition::Extended => current.saturating_add(1),
        StreakTransition::Unchanged => current,
        StreakTransition::Started | StreakTransition::Reset | StreakTransition::Backdated => 1,
    }
}
