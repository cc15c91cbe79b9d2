use std::sync::Arc;

use axum_test::TestServer;
use roster_server::{
    AppState,
    infra::config::Config,
    routes,
    store::{MemoryUserStore, UserStore},
};

/// Build a TestServer over the in-memory store, returning the store handle
/// so tests can drive its health state directly.
pub fn build_test_server() -> (TestServer, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::new());
    let users: Arc<dyn UserStore> = store.clone();
    let state = AppState {
        users,
        config: Arc::new(Config::default()),
    };
    let server =
        TestServer::new(routes::create_router(state)).expect("test server should build");
    (server, store)
}
