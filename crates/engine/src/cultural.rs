//! Cultural content catalog: notes, idioms and fun facts per language.

use std::sync::Arc;

use tandem_core::cultural::{CulturalBundle, CulturalNote, FunFact, Idiom};
use tandem_core::error::CoreError;
use tandem_core::generation;
use tandem_core::language::Language;
use tandem_core::prompts;
use tandem_db::repositories::CulturalRepo;
use tandem_db::StoreHandle;
use tandem_llm::{CompletionRequest, LlmClient};

use crate::error::EngineError;

pub struct CulturalCatalog {
    store: StoreHandle,
    llm: Arc<dyn LlmClient>,
    /// Answers idiom and fun fact prompts. Same client as `llm` unless
    /// overridden.
    idiom_llm: Arc<dyn LlmClient>,
}

impl CulturalCatalog {
    pub fn new(store: StoreHandle, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            store,
            idiom_llm: llm.clone(),
            llm,
        }
    }

    /// Route idiom and fun fact generation to a different provider.
    pub fn with_idiom_client(mut self, llm: Arc<dyn LlmClient>) -> Self {
        self.idiom_llm = llm;
        self
    }

    // -----------------------------------------------------------------------
    // Notes
    // -----------------------------------------------------------------------

    pub async fn notes_by_language(&self, language: Language) -> Result<Vec<CulturalNote>, EngineError> {
        Ok(CulturalRepo::notes_for_language(&*self.store, language).await?)
    }

    pub async fn get_note(&self, id: &str) -> Result<CulturalNote, EngineError> {
        CulturalRepo::find_note(&*self.store, id)
            .await?
            .ok_or_else(|| CoreError::not_found("Cultural note", id).into())
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), EngineError> {
        if !CulturalRepo::delete_note(&*self.store, id).await? {
            return Err(CoreError::not_found("Cultural note", id).into());
        }
        tracing::info!(note_id = id, "Deleted cultural note");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Idioms
    // -----------------------------------------------------------------------

    pub async fn idioms_by_language(&self, language: Language) -> Result<Vec<Idiom>, EngineError> {
        Ok(CulturalRepo::idioms_for_language(&*self.store, language).await?)
    }

    pub async fn get_idiom(&self, id: &str) -> Result<Idiom, EngineError> {
        CulturalRepo::find_idiom(&*self.store, id)
            .await?
            .ok_or_else(|| CoreError::not_found("Idiom", id).into())
    }

    pub async fn delete_idiom(&self, id: &str) -> Result<(), EngineError> {
        if !CulturalRepo::delete_idiom(&*self.store, id).await? {
            return Err(CoreError::not_found("Idiom", id).into());
        }
        tracing::info!(idiom_id = id, "Deleted idiom");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Fun facts
    // -----------------------------------------------------------------------

    pub async fn fun_facts_by_language(&self, language: Language) -> Result<Vec<FunFact>, EngineError> {
        Ok(CulturalRepo::fun_facts_for_language(&*self.store, language).await?)
    }

    pub async fn get_fun_fact(&self, id: &str) -> Result<FunFact, EngineError> {
        CulturalRepo::find_fun_fact(&*self.store, id)
            .await?
            .ok_or_else(|| CoreError::not_found("Fun fact", id).into())
    }

    pub async fn delete_fun_fact(&self, id: &str) -> Result<(), EngineError> {
        if !CulturalRepo::delete_fun_fact(&*self.store, id).await? {
            return Err(CoreError::not_found("Fun fact", id).into());
        }
        tracing::info!(fact_id = id, "Deleted fun fact");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    /// Generate a note, an idiom and a fun fact for `language`.
    ///
    /// All three replies are requested and parsed before anything is
    /// written, so a failed or malformed reply leaves the store untouched.
    pub async fn generate(&self, language: Language) -> Result<CulturalBundle, EngineError> {
        let reply = ask(&*self.llm, prompts::cultural_note_prompt(language)).await?;
        let note = generation::cultural_note(&reply, language)?;

        let reply = ask(&*self.idiom_llm, prompts::idiom_prompt(language)).await?;
        let idiom = generation::idiom(&reply, language)?;

        let reply = ask(&*self.idiom_llm, prompts::fun_fact_prompt(language)).await?;
        let fun_fact = generation::fun_fact(&reply, language)?;

        CulturalRepo::save_note(&*self.store, &note).await?;
        CulturalRepo::save_idiom(&*self.store, &idiom).await?;
        CulturalRepo::save_fun_fact(&*self.store, &fun_fact).await?;

        tracing::info!(
            language = %language,
            note_id = %note.id,
            idiom_id = %idiom.id,
            fact_id = %fun_fact.id,
            provider = self.llm.name(),
            idiom_provider = self.idiom_llm.name(),
            "Generated cultural content",
        );

        Ok(CulturalBundle {
            note,
            idiom,
            fun_fact,
        })
    }
}

async fn ask(llm: &dyn LlmClient, prompt: String) -> Result<String, EngineError> {
    let request = CompletionRequest::new(prompt).with_system(prompts::CULTURAL_SYSTEM_PROMPT);
    Ok(llm.complete(&request).await?)
}
