use std::{fmt, sync::Arc};

use crate::infra::config::Config;
use crate::store::UserStore;

/// Shared handles for request handlers.
///
/// Built once at startup and cloned per request; the store connection is
/// established once and shared, never re-opened inside a handler. The
/// driver owns pooling internally.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
