use crate::environment::{Clock, HostnameSource, SystemClock, SystemHostname};
use crate::identity::ServiceIdentity;
use std::sync::Arc;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub identity: ServiceIdentity,
    pub hostname: Arc<dyn HostnameSource>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(identity: ServiceIdentity) -> Self {
        Self::with_sources(identity, Arc::new(SystemHostname), Arc::new(SystemClock))
    }

    pub fn with_sources(
        identity: ServiceIdentity,
        hostname: Arc<dyn HostnameSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identity,
            hostname,
            clock,
        }
    }
}
