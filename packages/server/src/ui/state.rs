//! Shared application state.

use std::sync::Arc;

use crate::domain::{MessageTransformer, UppercaseTransformer};

/// Shared application state
pub struct AppState {
    /// Transformer applied to every incoming message
    pub transformer: Arc<dyn MessageTransformer>,
}

impl AppState {
    pub fn new(transformer: Arc<dyn MessageTransformer>) -> Self {
        Self { transformer }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(UppercaseTransformer::new()))
    }
}
