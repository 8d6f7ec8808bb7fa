//! Shared application state.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::error::Result;
use crate::telemetry::Metrics;
use crate::users::sqlite::UserStore;

pub struct AppStateInner {
    pub auth: AuthConfig,
    pub users: UserStore,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

/// Fails fast when `JWT_SECRET` is absent: no state, no router, no listener.
pub fn build_state(db_path: &str) -> Result<AppState> {
    let auth = AuthConfig::from_env()?;
    Ok(Arc::new(AppStateInner {
        auth,
        users: UserStore::open(db_path)?,
        metrics: Metrics::new(),
    }))
}

#[cfg(test)]
pub fn build_test_state(secret: &str, ttl: &str) -> Result<AppState> {
    Ok(Arc::new(AppStateInner {
        auth: AuthConfig::new(secret, ttl)?,
        users: UserStore::open_in_memory()?,
        metrics: Metrics::new(),
    }))
}
