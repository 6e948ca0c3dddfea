//! Point and skill-counter tables for completed exercises.

use crate::exercise::{Difficulty, Exercise, ExerciseContent, ExerciseType};
use crate::progress::SkillStats;

/// Base points per exercise type, before the difficulty multiplier.
pub fn base_points(exercise_type: ExerciseType) -> u32 {
    match exercise_type {
        ExerciseType::Flashcard => 5,
        ExerciseType::Quiz => 10,
        ExerciseType::Conversation => 15,
        ExerciseType::Pronunciation => 10,
    }
}

/// Multiplier per difficulty; unrecognized difficulties count as beginner.
pub fn difficulty_multiplier(difficulty: &Difficulty) -> u32 {
    match difficulty {
        Difficulty::Beginner => 1,
        Difficulty::Intermediate => 2,
        Difficulty::Advanced => 3,
        Difficulty::Fluent => 4,
        Difficulty::Other(_) => 1,
    }
}

/// Points awarded the first time `exercise` is completed.
pub fn points_for(exercise: &Exercise) -> u32 {
    base_points(exercise.exercise_type()) * difficulty_multiplier(&exercise.difficulty)
}

/// Skill counters credited by completing an exercise with this content.
pub fn skill_gain(content: &ExerciseContent) -> SkillStats {
    let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);

    match content {
        ExerciseContent::Flashcard { items } => SkillStats {
            vocabulary: count(items.len()),
            ..SkillStats::default()
        },
        ExerciseContent::Quiz { questions } => SkillStats {
            grammar: count(questions.len()),
            ..SkillStats::default()
        },
        ExerciseContent::Conversation { .. } => SkillStats {
            speaking: 1,
            ..SkillStats::default()
        },
        ExerciseContent::Pronunciation { items } => SkillStats {
            speaking: count(items.len()),
            listening: count(items.len()),
            ..SkillStats::default()
        },
    }
}
