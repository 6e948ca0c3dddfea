//! User profiles (collection `users`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::language::{Language, ProficiencyLevel};
use crate::types::RecordId;

/// Maximum number of interests stored on a profile.
pub const MAX_INTERESTS: usize = 20;

/// A tandem learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Empty on create requests; the server assigns `user-xxxxxxxx`.
    #[serde(default)]
    pub id: RecordId,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    pub native_language: Language,
    pub target_language: Language,
    pub proficiency_level: ProficiencyLevel,
    #[serde(default)]
    #[validate(length(max = 20, message = "At most 20 interests are allowed"))]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Validate a user profile before it is persisted.
pub fn validate_user(user: &User) -> Result<(), CoreError> {
    user.validate()?;

    if user.name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be blank".to_string()));
    }

    if user.native_language == user.target_language {
        return Err(CoreError::Validation(format!(
            "Target language must differ from native language '{}'",
            user.native_language
        )));
    }

    if user.interests.iter().any(|i| i.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Interests must be non-empty strings".to_string(),
        ));
    }

    Ok(())
}

/// Pick the conversation topic for a pair: the alphabetically first shared
/// interest, else the learner's first interest.
pub fn shared_interest<'a>(user: &'a User, partner: &User) -> Option<&'a str> {
    let mut shared: Vec<&str> = user
        .interests
        .iter()
        .filter(|i| partner.interests.contains(i))
        .map(String::as_str)
        .collect();
    shared.sort_unstable();

    shared
        .first()
        .copied()
        .or_else(|| user.interests.first().map(String::as_str))
}
