//! Shared server state
//!
//! Everything a connection task needs, behind cheap-to-clone handles.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::auth::UserStore;
use crate::client::ClientRegistry;
use crate::config::{ServerConfig, SharedRuntimeConfig, StartupConfig};
use crate::middleware::RateLimiter;

#[derive(Clone)]
pub struct ServerContext {
    pub store: Arc<UserStore>,
    pub clients: Arc<Mutex<ClientRegistry>>,
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
    pub startup: Arc<StartupConfig>,
    pub runtime: SharedRuntimeConfig,
}

impl ServerContext {
    pub fn new(config: ServerConfig) -> Self {
        let (startup, runtime) = config.split();
        let rate_limiter = RateLimiter::new(startup.auth_attempts_per_window, startup.auth_window());

        Self {
            store: Arc::new(UserStore::new()),
            clients: Arc::new(Mutex::new(ClientRegistry::new())),
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
            startup: Arc::new(startup),
            runtime,
        }
    }
}
