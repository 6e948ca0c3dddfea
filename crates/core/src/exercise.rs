//! Learning exercises (collection `exercises`).
//!
//! The payload of an exercise depends on its type, so [`ExerciseContent`] is
//! a tagged union. On the wire and on disk an exercise keeps the flat
//! `{"type": "quiz", "content": {"questions": [...]}}` shape; decoding checks
//! that the content matches the declared type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::language::{Language, ProficiencyLevel};
use crate::types::RecordId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Flashcard,
    Quiz,
    Conversation,
    Pronunciation,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 4] = [
        Self::Flashcard,
        Self::Quiz,
        Self::Conversation,
        Self::Pronunciation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flashcard => "flashcard",
            Self::Quiz => "quiz",
            Self::Conversation => "conversation",
            Self::Pronunciation => "pronunciation",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid exercise type '{s}'. Must be one of: flashcard, quiz, conversation, pronunciation"
                ))
            })
    }
}

/// Exercise difficulty. Free-form strings are kept as [`Difficulty::Other`]
/// so records written by older clients still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Fluent,
    Other(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Fluent => "fluent",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        match s.as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "fluent" => Self::Fluent,
            _ => Self::Other(s),
        }
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl From<ProficiencyLevel> for Difficulty {
    fn from(level: ProficiencyLevel) -> Self {
        match level {
            ProficiencyLevel::Beginner => Self::Beginner,
            ProficiencyLevel::Intermediate => Self::Intermediate,
            ProficiencyLevel::Advanced => Self::Advanced,
            ProficiencyLevel::Fluent => Self::Fluent,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseStatus {
    #[default]
    New,
    InProgress,
    Completed,
}

impl ExerciseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for ExerciseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Invalid exercise status '{other}'. Must be one of: new, in_progress, completed"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Content payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardItem {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationPrompt {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_vocabulary: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationItem {
    pub phrase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic_spelling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Type-specific exercise payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseContent {
    Flashcard { items: Vec<FlashcardItem> },
    Quiz { questions: Vec<QuizItem> },
    Conversation { prompts: Vec<ConversationPrompt> },
    Pronunciation { items: Vec<PronunciationItem> },
}

impl ExerciseContent {
    pub fn exercise_type(&self) -> ExerciseType {
        match self {
            Self::Flashcard { .. } => ExerciseType::Flashcard,
            Self::Quiz { .. } => ExerciseType::Quiz,
            Self::Conversation { .. } => ExerciseType::Conversation,
            Self::Pronunciation { .. } => ExerciseType::Pronunciation,
        }
    }

    /// Number of list entries in the payload (items, questions or prompts).
    pub fn len(&self) -> usize {
        match self {
            Self::Flashcard { items } => items.len(),
            Self::Quiz { questions } => questions.len(),
            Self::Conversation { prompts } => prompts.len(),
            Self::Pronunciation { items } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the `content` object of a record whose declared type is `ty`.
    /// Missing lists decode as empty.
    pub fn from_json(ty: ExerciseType, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let value = match value {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => other,
        };

        Ok(match ty {
            ExerciseType::Flashcard => {
                let c: ItemsPayload<FlashcardItem> = serde_json::from_value(value)?;
                Self::Flashcard { items: c.items }
            }
            ExerciseType::Quiz => {
                let c: QuestionsPayload = serde_json::from_value(value)?;
                Self::Quiz {
                    questions: c.questions,
                }
            }
            ExerciseType::Conversation => {
                let c: PromptsPayload = serde_json::from_value(value)?;
                Self::Conversation { prompts: c.prompts }
            }
            ExerciseType::Pronunciation => {
                let c: ItemsPayload<PronunciationItem> = serde_json::from_value(value)?;
                Self::Pronunciation { items: c.items }
            }
        })
    }

    /// Encode as the `content` object (without the type tag).
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Flashcard { items } => serde_json::json!({ "items": items }),
            Self::Quiz { questions } => serde_json::json!({ "questions": questions }),
            Self::Conversation { prompts } => serde_json::json!({ "prompts": prompts }),
            Self::Pronunciation { items } => serde_json::json!({ "items": items }),
        }
    }
}

#[derive(Deserialize)]
struct ItemsPayload<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct QuestionsPayload {
    #[serde(default)]
    questions: Vec<QuizItem>,
}

#[derive(Deserialize)]
struct PromptsPayload {
    #[serde(default)]
    prompts: Vec<ConversationPrompt>,
}

// ---------------------------------------------------------------------------
// Exercise
// ---------------------------------------------------------------------------

/// A learning exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseRecord", into = "ExerciseRecord")]
pub struct Exercise {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub language: Language,
    pub difficulty: Difficulty,
    pub status: ExerciseStatus,
    pub content: ExerciseContent,
}

impl Exercise {
    pub fn exercise_type(&self) -> ExerciseType {
        self.content.exercise_type()
    }
}

/// Flat wire/storage shape of an [`Exercise`].
#[derive(Serialize, Deserialize)]
struct ExerciseRecord {
    #[serde(default)]
    id: RecordId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    exercise_type: ExerciseType,
    language: Language,
    difficulty: Difficulty,
    #[serde(default)]
    status: ExerciseStatus,
    #[serde(default)]
    content: serde_json::Value,
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = String;

    fn try_from(r: ExerciseRecord) -> Result<Self, Self::Error> {
        let content = ExerciseContent::from_json(r.exercise_type, r.content)
            .map_err(|e| format!("invalid {} content: {e}", r.exercise_type))?;

        Ok(Self {
            id: r.id,
            title: r.title,
            description: r.description,
            language: r.language,
            difficulty: r.difficulty,
            status: r.status,
            content,
        })
    }
}

impl From<Exercise> for ExerciseRecord {
    fn from(e: Exercise) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            exercise_type: e.content.exercise_type(),
            language: e.language,
            difficulty: e.difficulty,
            status: e.status,
            content: e.content.to_json(),
        }
    }
}

/// Validate an exercise before it is persisted through the create endpoint.
pub fn validate_exercise(exercise: &Exercise) -> Result<(), CoreError> {
    if exercise.id.trim().is_empty() {
        return Err(CoreError::Validation("Exercise id is required".to_string()));
    }

    if exercise.title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Exercise title must not be empty".to_string(),
        ));
    }

    if let ExerciseContent::Quiz { questions } = &exercise.content {
        for (i, q) in questions.iter().enumerate() {
            if q.correct_answer >= q.options.len() {
                return Err(CoreError::Validation(format!(
                    "Question {i}: correct_answer {} is out of range for {} options",
                    q.correct_answer,
                    q.options.len()
                )));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Optional list filters; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExerciseFilter {
    pub language: Option<Language>,
    #[serde(rename = "type")]
    pub exercise_type: Option<ExerciseType>,
    pub status: Option<ExerciseStatus>,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.language.map_or(true, |l| exercise.language == l)
            && self
                .exercise_type
                .map_or(true, |t| exercise.exercise_type() == t)
            && self.status.map_or(true, |s| exercise.status == s)
    }
}
