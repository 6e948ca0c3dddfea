#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use tandem_core::clock::FixedClock;
use tandem_core::exercise::{
    Difficulty, Exercise, ExerciseContent, ExerciseStatus, FlashcardItem, QuizItem,
};
use tandem_core::language::{Language, ProficiencyLevel};
use tandem_core::user::User;
use tandem_db::{MemoryStore, StoreHandle};

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

pub fn store() -> StoreHandle {
    Arc::new(MemoryStore::new())
}

pub fn clock_on(d: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock::at_date(day(d)))
}

pub fn learner(id: &str, interests: &[&str]) -> User {
    User {
        id: id.to_string(),
        name: format!("Learner {id}"),
        native_language: Language::English,
        target_language: Language::Spanish,
        proficiency_level: ProficiencyLevel::Intermediate,
        interests: interests.iter().map(|s| s.to_string()).collect(),
        avatar: None,
    }
}

pub fn partner(id: &str, interests: &[&str]) -> User {
    User {
        native_language: Language::Spanish,
        target_language: Language::English,
        ..learner(id, interests)
    }
}

pub fn flashcards(id: &str, items: usize) -> Exercise {
    Exercise {
        id: id.to_string(),
        title: "Cards".to_string(),
        description: String::new(),
        language: Language::Spanish,
        difficulty: Difficulty::Beginner,
        status: ExerciseStatus::New,
        content: ExerciseContent::Flashcard {
            items: (0..items)
                .map(|i| FlashcardItem {
                    term: format!("term {i}"),
                    definition: format!("definition {i}"),
                    example: None,
                    image_url: None,
                })
                .collect(),
        },
    }
}

pub fn quiz(id: &str, difficulty: Difficulty) -> Exercise {
    Exercise {
        id: id.to_string(),
        title: "Quiz".to_string(),
        description: String::new(),
        language: Language::Spanish,
        difficulty,
        status: ExerciseStatus::New,
        content: ExerciseContent::Quiz {
            questions: vec![QuizItem {
                question: "¿Qué hora es?".to_string(),
                options: vec!["Las tres".to_string(), "Azul".to_string()],
                correct_answer: 0,
                explanation: None,
            }],
        },
    }
}

pub const FLASHCARD_REPLY: &str = r#"{
    "title": "Viajes",
    "items": [
        {"term": "el billete", "definition": "ticket", "example": "Compré un billete."},
        {"term": "la maleta", "definition": "suitcase"}
    ]
}"#;

pub const QUIZ_REPLY: &str = r#"```json
{
    "questions": [
        {"question": "¿Cómo se dice 'bread'?", "options": ["pan", "agua"], "correct_answer": 0}
    ]
}
```"#;

pub const CONVERSATION_REPLY: &str = r#"{
    "title": "Hablemos de música",
    "prompts": [{"prompt": "¿Qué música te gusta?", "suggested_vocabulary": ["canción"]}]
}"#;
