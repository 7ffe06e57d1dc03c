use std::sync::Arc;

use services::AinstienApi;

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn api(&self) -> Arc<dyn AinstienApi>;
}

#[derive(Clone)]
pub struct AppContext {
    api: Arc<dyn AinstienApi>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { api: app.api() }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn AinstienApi> {
        Arc::clone(&self.api)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
