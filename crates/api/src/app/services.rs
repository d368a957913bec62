use std::sync::Arc;

use crate::app::views::ViewRenderer;

/// Request-time services shared by every handler.
///
/// Immutable after startup; handlers receive it as `Extension<Arc<AppServices>>`.
pub struct AppServices {
    pub renderer: Arc<dyn ViewRenderer>,
    pub temp_password_length: usize,
}

impl AppServices {
    pub fn new(renderer: Arc<dyn ViewRenderer>, temp_password_length: usize) -> Self {
        Self {
            renderer,
            temp_password_length,
        }
    }
}
