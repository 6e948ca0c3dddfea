use std::sync::Arc;

use tandem_core::clock::Clock;
use tandem_db::StoreHandle;
use tandem_engine::{CulturalCatalog, ExerciseCatalog, ProgressEngine};

use crate::config::ServerConfig;
use crate::llm::LlmClients;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Record store backing every collection.
    pub store: StoreHandle,
    pub progress: Arc<ProgressEngine>,
    pub exercises: Arc<ExerciseCatalog>,
    pub cultural: Arc<CulturalCatalog>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the services around one store, the LLM clients and one clock.
    pub fn new(
        store: StoreHandle,
        llm: LlmClients,
        clock: Arc<dyn Clock>,
        config: ServerConfig,
    ) -> Self {
        Self {
            progress: Arc::new(ProgressEngine::new(store.clone(), clock)),
            exercises: Arc::new(ExerciseCatalog::new(store.clone(), llm.primary.clone())),
            cultural: Arc::new(
                CulturalCatalog::new(store.clone(), llm.primary).with_idiom_client(llm.idioms),
            ),
            store,
            config: Arc::new(config),
        }
    }
}
