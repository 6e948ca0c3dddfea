//! Cultural learning content: notes, idioms and fun facts.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::types::RecordId;

/// Collection `cultural_notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalNote {
    pub id: RecordId,
    pub language: Language,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_vocabulary: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A comparable idiom in another language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalentIdiom {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub phrase: String,
}

/// Collection `idioms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idiom {
    pub id: RecordId,
    pub language: Language,
    pub original_phrase: String,
    pub literal_translation: String,
    pub meaning: String,
    pub example_usage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equivalent_idioms: Option<Vec<EquivalentIdiom>>,
}

/// Collection `fun_facts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunFact {
    pub id: RecordId,
    pub language: Language,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One generated batch: a note, an idiom and a fun fact for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CulturalBundle {
    pub note: CulturalNote,
    pub idiom: Idiom,
    pub fun_fact: FunFact,
}
