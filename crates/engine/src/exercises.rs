//! Exercise catalog: CRUD over stored exercises and LLM-backed generation
//! of new ones for a tandem pair.

use std::sync::Arc;

use tandem_core::error::CoreError;
use tandem_core::exercise::{validate_exercise, Exercise, ExerciseFilter, ExerciseStatus, ExerciseType};
use tandem_core::generation::{self, plan_exercises, validate_generate_count, PlannedExercise};
use tandem_core::prompts;
use tandem_core::types::generate_id;
use tandem_core::user::{shared_interest, User};
use tandem_db::repositories::ExerciseRepo;
use tandem_db::StoreHandle;
use tandem_llm::{CompletionRequest, LlmClient};

use crate::error::EngineError;

pub struct ExerciseCatalog {
    store: StoreHandle,
    llm: Arc<dyn LlmClient>,
}

impl ExerciseCatalog {
    pub fn new(store: StoreHandle, llm: Arc<dyn LlmClient>) -> Self {
        Self { store, llm }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub async fn get(&self, id: &str) -> Result<Exercise, EngineError> {
        ExerciseRepo::find_by_id(&*self.store, id)
            .await?
            .ok_or_else(|| CoreError::not_found("Exercise", id).into())
    }

    pub async fn list(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, EngineError> {
        Ok(ExerciseRepo::list(&*self.store, filter).await?)
    }

    /// Exercises in the user's target language.
    pub async fn list_for_user(&self, user: &User) -> Result<Vec<Exercise>, EngineError> {
        Ok(ExerciseRepo::list_by_language(&*self.store, user.target_language).await?)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Validate and store a client-authored exercise. An empty id is
    /// replaced with a generated one.
    pub async fn create(&self, mut exercise: Exercise) -> Result<Exercise, EngineError> {
        if exercise.id.trim().is_empty() {
            exercise.id = generate_id("ex");
        }
        validate_exercise(&exercise)?;

        ExerciseRepo::save(&*self.store, &exercise).await?;
        tracing::info!(exercise_id = %exercise.id, exercise_type = %exercise.exercise_type(), "Created exercise");
        Ok(exercise)
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: ExerciseStatus,
    ) -> Result<Exercise, EngineError> {
        let exercise = ExerciseRepo::update_status(&*self.store, id, status)
            .await?
            .ok_or_else(|| CoreError::not_found("Exercise", id))?;

        tracing::info!(exercise_id = id, status = status.as_str(), "Updated exercise status");
        Ok(exercise)
    }

    pub async fn delete(&self, id: &str) -> Result<(), EngineError> {
        if !ExerciseRepo::delete(&*self.store, id).await? {
            return Err(CoreError::not_found("Exercise", id).into());
        }
        tracing::info!(exercise_id = id, "Deleted exercise");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    /// Generate `count` exercises in `user`'s target language, cycling
    /// through flashcards, quizzes and conversation prompts.
    ///
    /// Each exercise is persisted as soon as it is parsed. If a later call
    /// fails, the ones already stored stay stored and the error is returned.
    pub async fn generate(
        &self,
        user: &User,
        partner: &User,
        count: usize,
    ) -> Result<Vec<Exercise>, EngineError> {
        validate_generate_count(count)?;

        let plan = plan_exercises(count);
        let mut generated = Vec::with_capacity(plan.len());

        for planned in plan {
            let exercise = self.generate_one(user, partner, planned).await?;
            ExerciseRepo::save(&*self.store, &exercise).await?;
            generated.push(exercise);
        }

        tracing::info!(
            user_id = %user.id,
            partner_id = %partner.id,
            count = generated.len(),
            provider = self.llm.name(),
            "Generated exercises",
        );
        Ok(generated)
    }

    async fn generate_one(
        &self,
        user: &User,
        partner: &User,
        planned: PlannedExercise,
    ) -> Result<Exercise, EngineError> {
        let topic = planned.topic;

        let exercise = match planned.exercise_type {
            ExerciseType::Flashcard => {
                let reply = self.ask(prompts::flashcard_prompt(user, topic)).await?;
                generation::flashcard_exercise(&reply, user, topic)?
            }
            ExerciseType::Quiz => {
                let reply = self.ask(prompts::quiz_prompt(user, topic)).await?;
                generation::quiz_exercise(&reply, user, topic)?
            }
            ExerciseType::Conversation => {
                let interest = shared_interest(user, partner).unwrap_or(topic);
                let reply = self
                    .ask(prompts::conversation_prompt(user, partner, interest))
                    .await?;
                generation::conversation_exercise(&reply, user, interest)?
            }
            ExerciseType::Pronunciation => {
                return Err(CoreError::Validation(
                    "Pronunciation exercises cannot be generated".to_string(),
                )
                .into());
            }
        };

        tracing::debug!(
            exercise_id = %exercise.id,
            exercise_type = %exercise.exercise_type(),
            topic,
            items = exercise.content.len(),
            "Generated exercise",
        );
        Ok(exercise)
    }

    async fn ask(&self, prompt: String) -> Result<String, EngineError> {
        let request = CompletionRequest::new(prompt).with_system(prompts::EXERCISE_SYSTEM_PROMPT);
        Ok(self.llm.complete(&request).await?)
    }
}
