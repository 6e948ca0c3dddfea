//! Planning exercise batches and turning LLM replies into records.
//!
//! Replies are expected to be a JSON object, optionally wrapped in a
//! Markdown code fence. Missing fields fall back to defaults; a reply that
//! is not JSON, or whose fields have the wrong shape, is a
//! [`MalformedResponse`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::cultural::{CulturalNote, EquivalentIdiom, FunFact, Idiom};
use crate::error::CoreError;
use crate::exercise::{
    ConversationPrompt, Exercise, ExerciseContent, ExerciseStatus, ExerciseType, FlashcardItem,
    QuizItem,
};
use crate::language::Language;
use crate::types::generate_id;
use crate::user::User;

// ---------------------------------------------------------------------------
// Batch planning
// ---------------------------------------------------------------------------

pub const MIN_GENERATE_COUNT: usize = 1;
pub const MAX_GENERATE_COUNT: usize = 10;
pub const DEFAULT_GENERATE_COUNT: usize = 3;

/// Exercise types produced by generation, in rotation order.
pub const GENERATED_TYPES: [ExerciseType; 3] = [
    ExerciseType::Flashcard,
    ExerciseType::Quiz,
    ExerciseType::Conversation,
];

/// Topics used for flashcard and quiz generation, in rotation order.
pub const TOPICS: [&str; 5] = ["travel", "food", "daily life", "hobbies", "culture"];

/// One exercise to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedExercise {
    pub exercise_type: ExerciseType,
    pub topic: &'static str,
}

pub fn validate_generate_count(count: usize) -> Result<(), CoreError> {
    if (MIN_GENERATE_COUNT..=MAX_GENERATE_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "count must be between {MIN_GENERATE_COUNT} and {MAX_GENERATE_COUNT}, got {count}"
        )))
    }
}

/// Lay out `count` exercises, cycling through [`GENERATED_TYPES`] and
/// [`TOPICS`] independently.
pub fn plan_exercises(count: usize) -> Vec<PlannedExercise> {
    (0..count)
        .map(|i| PlannedExercise {
            exercise_type: GENERATED_TYPES[i % GENERATED_TYPES.len()],
            topic: TOPICS[i % TOPICS.len()],
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Reply parsing
// ---------------------------------------------------------------------------

/// The LLM answered, but not with usable JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed {kind} response: {message}")]
pub struct MalformedResponse {
    pub kind: &'static str,
    pub message: String,
}

/// Strip an optional Markdown code fence around a JSON reply.
pub fn extract_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn parse_reply<T: DeserializeOwned>(kind: &'static str, raw: &str) -> Result<T, MalformedResponse> {
    let value: serde_json::Value =
        serde_json::from_str(extract_json(raw)).map_err(|e| MalformedResponse {
            kind,
            message: e.to_string(),
        })?;

    if !value.is_object() {
        return Err(MalformedResponse {
            kind,
            message: "expected a JSON object".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| MalformedResponse {
        kind,
        message: e.to_string(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[derive(Deserialize)]
struct FlashcardReply {
    title: Option<String>,
    #[serde(default)]
    items: Vec<FlashcardItem>,
}

#[derive(Deserialize)]
struct QuizReply {
    title: Option<String>,
    #[serde(default)]
    questions: Vec<QuizItem>,
}

#[derive(Deserialize)]
struct ConversationReply {
    title: Option<String>,
    #[serde(default)]
    prompts: Vec<ConversationPrompt>,
}

fn new_exercise(user: &User, title: String, description: String, content: ExerciseContent) -> Exercise {
    Exercise {
        id: generate_id("ex"),
        title,
        description,
        language: user.target_language,
        difficulty: user.proficiency_level.into(),
        status: ExerciseStatus::New,
        content,
    }
}

pub fn flashcard_exercise(raw: &str, user: &User, topic: &str) -> Result<Exercise, MalformedResponse> {
    let reply: FlashcardReply = parse_reply("flashcard", raw)?;
    let target = user.target_language;
    Ok(new_exercise(
        user,
        non_empty(reply.title).unwrap_or_else(|| format!("{} Flashcards: {topic}", target.label())),
        format!("Practice {target} vocabulary about {topic}"),
        ExerciseContent::Flashcard { items: reply.items },
    ))
}

pub fn quiz_exercise(raw: &str, user: &User, topic: &str) -> Result<Exercise, MalformedResponse> {
    let reply: QuizReply = parse_reply("quiz", raw)?;
    let target = user.target_language;
    Ok(new_exercise(
        user,
        non_empty(reply.title).unwrap_or_else(|| format!("{} Quiz: {topic}", target.label())),
        format!("Test your {target} knowledge about {topic}"),
        ExerciseContent::Quiz {
            questions: reply.questions,
        },
    ))
}

pub fn conversation_exercise(
    raw: &str,
    user: &User,
    interest: &str,
) -> Result<Exercise, MalformedResponse> {
    let reply: ConversationReply = parse_reply("conversation", raw)?;
    Ok(new_exercise(
        user,
        non_empty(reply.title).unwrap_or_else(|| format!("Conversation Practice: {interest}")),
        format!("Practice conversation with your tandem partner about {interest}"),
        ExerciseContent::Conversation {
            prompts: reply.prompts,
        },
    ))
}

#[derive(Deserialize)]
struct NoteReply {
    title: Option<String>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    related_vocabulary: Vec<String>,
}

#[derive(Deserialize)]
struct IdiomReply {
    #[serde(default)]
    original_phrase: String,
    #[serde(default)]
    literal_translation: String,
    #[serde(default)]
    meaning: String,
    #[serde(default)]
    example_usage: String,
    #[serde(default)]
    equivalent_idioms: Vec<EquivalentIdiom>,
}

#[derive(Deserialize)]
struct FunFactReply {
    title: Option<String>,
    #[serde(default)]
    content: String,
}

pub fn cultural_note(raw: &str, language: Language) -> Result<CulturalNote, MalformedResponse> {
    let reply: NoteReply = parse_reply("cultural note", raw)?;
    Ok(CulturalNote {
        id: generate_id("note"),
        language,
        title: non_empty(reply.title)
            .unwrap_or_else(|| format!("Cultural Note about {}", language.label())),
        content: reply.content,
        related_vocabulary: Some(reply.related_vocabulary),
        image_url: None,
    })
}

pub fn idiom(raw: &str, language: Language) -> Result<Idiom, MalformedResponse> {
    let reply: IdiomReply = parse_reply("idiom", raw)?;
    Ok(Idiom {
        id: generate_id("idiom"),
        language,
        original_phrase: reply.original_phrase,
        literal_translation: reply.literal_translation,
        meaning: reply.meaning,
        example_usage: reply.example_usage,
        equivalent_idioms: Some(reply.equivalent_idioms),
    })
}

pub fn fun_fact(raw: &str, language: Language) -> Result<FunFact, MalformedResponse> {
    let reply: FunFactReply = parse_reply("fun fact", raw)?;
    Ok(FunFact {
        id: generate_id("fact"),
        language,
        title: non_empty(reply.title)
            .unwrap_or_else(|| format!("Fun Fact about {}", language.label())),
        content: reply.content,
        image_url: None,
    })
}
