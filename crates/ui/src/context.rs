use std::sync::Arc;

use services::GardenService;

/// Services the UI needs, provided by the application composition root
/// (e.g. `crates/app`).
pub trait UiApp: Send + Sync {
    fn garden(&self) -> Arc<GardenService>;
}

#[derive(Clone)]
pub struct AppContext {
    garden: Arc<GardenService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            garden: app.garden(),
        }
    }

    #[must_use]
    pub fn garden(&self) -> Arc<GardenService> {
        Arc::clone(&self.garden)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
