//! Prompt templates sent to the LLM.
//!
//! Every template asks for a JSON object; the matching parser lives in
//! [`crate::generation`].

use crate::language::Language;
use crate::user::User;

pub const EXERCISE_SYSTEM_PROMPT: &str = "You are a language learning assistant";
pub const CULTURAL_SYSTEM_PROMPT: &str = "You are a cultural expert for language learning";

pub fn flashcard_prompt(user: &User, topic: &str) -> String {
    let target = user.target_language;
    format!(
        r#"Generate a set of 5 flashcards for learning {target} at {level} level.
Topic: {topic}
Format each flashcard with:
- term (in {target})
- definition (in {native})
- example sentence (in {target})

Return as JSON in this format:
{{
    "title": "Flashcard exercise title",
    "items": [
        {{"term": "word1", "definition": "definition1", "example": "example1"}}
    ]
}}"#,
        level = user.proficiency_level,
        native = user.native_language,
    )
}

pub fn quiz_prompt(user: &User, topic: &str) -> String {
    format!(
        r#"Generate a quiz with 5 multiple-choice questions for learning {target}
at {level} level. Topic: {topic}

Format each question with:
- question text
- 4 options
- index of correct answer (0-3)
- explanation of answer

Return as JSON in this format:
{{
    "title": "Quiz title",
    "questions": [
        {{
            "question": "question text",
            "options": ["option1", "option2", "option3", "option4"],
            "correct_answer": 0,
            "explanation": "why this is correct"
        }}
    ]
}}"#,
        target = user.target_language,
        level = user.proficiency_level,
    )
}

pub fn conversation_prompt(user: &User, partner: &User, interest: &str) -> String {
    format!(
        r#"Generate 3 conversation prompts for language tandem practice between:
- Person 1: Native {u_native} speaker learning {u_target} at {u_level} level
- Person 2: Native {p_native} speaker learning {p_target} at {p_level} level

Topic of shared interest: {interest}

For each prompt include:
- The conversation prompt
- Some context about the topic
- 5 suggested vocabulary words that might be useful

Return as JSON in this format:
{{
    "title": "Conversation title",
    "prompts": [
        {{
            "prompt": "prompt text",
            "context": "context information",
            "suggested_vocabulary": ["word1", "word2", "word3", "word4", "word5"]
        }}
    ]
}}"#,
        u_native = user.native_language,
        u_target = user.target_language,
        u_level = user.proficiency_level,
        p_native = partner.native_language,
        p_target = partner.target_language,
        p_level = partner.proficiency_level,
    )
}

pub fn cultural_note_prompt(language: Language) -> String {
    format!(
        r#"Generate a cultural note about {language} language countries. Include:
- A title for the cultural note
- Main content (200-300 words)
- 5 related vocabulary words

Return as JSON in this format:
{{
    "title": "Cultural note title",
    "content": "Main content...",
    "related_vocabulary": ["word1", "word2", "word3", "word4", "word5"]
}}"#
    )
}

pub fn idiom_prompt(language: Language) -> String {
    format!(
        r#"Generate an interesting idiom in {language}. Include:
- The original phrase in {language}
- Literal translation to English
- Actual meaning
- An example of usage in context
- Equivalent idioms in other languages if any

Return as JSON in this format:
{{
    "original_phrase": "idiom in original language",
    "literal_translation": "word-for-word translation",
    "meaning": "what it actually means",
    "example_usage": "example sentence using the idiom",
    "equivalent_idioms": [
        {{"language": "english", "phrase": "equivalent english idiom"}}
    ]
}}"#
    )
}

pub fn fun_fact_prompt(language: Language) -> String {
    format!(
        r#"Generate an interesting cultural fun fact about {language}-speaking countries. Include:
- A catchy title
- The fun fact content (100-150 words)

Return as JSON in this format:
{{
    "title": "Fun fact title",
    "content": "Fun fact content..."
}}"#
    )
}
