use crate::openapi::ApiDocumentRegistry;
use crate::services::TranslationsApi;
use std::sync::Arc;

/// Shared state for web server handlers
#[derive(Clone)]
pub struct AppState {
    pub api: TranslationsApi,
    pub documents: Arc<ApiDocumentRegistry>,
}

impl AppState {
    pub fn new(api: TranslationsApi, documents: ApiDocumentRegistry) -> Self {
        Self {
            api,
            documents: Arc::new(documents),
        }
    }
}
