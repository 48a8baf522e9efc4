//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ProfileStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Profile persistence port shared by all profile endpoints.
    pub profiles: Arc<dyn ProfileStore>,
}

impl HttpState {
    /// Construct state around a profile store implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use padron::inbound::http::state::HttpState;
    /// use padron::outbound::persistence::MemoryProfileStore;
    ///
    /// let state = HttpState::new(Arc::new(MemoryProfileStore::new()));
    /// let _profiles = state.profiles.clone();
    /// ```
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }
}
