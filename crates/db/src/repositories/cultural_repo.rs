//! Repository for the cultural collections: `cultural_notes`, `idioms`
//! and `fun_facts`.

use tandem_core::cultural::{CulturalNote, FunFact, Idiom};
use tandem_core::language::Language;

use crate::store::{self, RecordStore, StoreError};

pub struct CulturalRepo;

impl CulturalRepo {
    // -----------------------------------------------------------------------
    // Notes
    // -----------------------------------------------------------------------

    pub async fn notes_for_language(
        store: &dyn RecordStore,
        language: Language,
    ) -> Result<Vec<CulturalNote>, StoreError> {
        store::query(store, move |n: &CulturalNote| n.language == language).await
    }

    pub async fn find_note(
        store: &dyn RecordStore,
        id: &str,
    ) -> Result<Option<CulturalNote>, StoreError> {
        store::fetch(store, id).await
    }

    pub async fn save_note(store: &dyn RecordStore, note: &CulturalNote) -> Result<(), StoreError> {
        store::persist(store, note).await
    }

    pub async fn delete_note(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
        store::remove::<CulturalNote>(store, id).await
    }

    // -----------------------------------------------------------------------
    // Idioms
    // -----------------------------------------------------------------------

    pub async fn idioms_for_language(
        store: &dyn RecordStore,
        language: Language,
    ) -> Result<Vec<Idiom>, StoreError> {
        store::query(store, move |i: &Idiom| i.language == language).await
    }

    pub async fn find_idiom(store: &dyn RecordStore, id: &str) -> Result<Option<Idiom>, StoreError> {
        store::fetch(store, id).await
    }

    pub async fn save_idiom(store: &dyn RecordStore, idiom: &Idiom) -> Result<(), StoreError> {
        store::persist(store, idiom).await
    }

    pub async fn delete_idiom(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
        store::remove::<Idiom>(store, id).await
    }

    // -----------------------------------------------------------------------
    // Fun facts
    // -----------------------------------------------------------------------

    pub async fn fun_facts_for_language(
        store: &dyn RecordStore,
        language: Language,
    ) -> Result<Vec<FunFact>, StoreError> {
        store::query(store, move |f: &FunFact| f.language == language).await
    }

    pub async fn find_fun_fact(
        store: &dyn RecordStore,
        id: &str,
    ) -> Result<Option<FunFact>, StoreError> {
        store::fetch(store, id).await
    }

    pub async fn save_fun_fact(store: &dyn RecordStore, fact: &FunFact) -> Result<(), StoreError> {
        store::persist(store, fact).await
    }

    pub async fn delete_fun_fact(store: &dyn RecordStore, id: &str) -> Result<bool, StoreError> {
        store::remove::<FunFact>(store, id).await
    }
}
