// src/presentation/http/state.rs
use std::sync::Arc;

use crate::application::services::ApplicationServices;
use crate::infrastructure::static_site::StaticSite;
use crate::presentation::routing::{Dispatcher, RouteTable};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub routes: Arc<RouteTable>,
    pub site: StaticSite,
    /// Public base URL without trailing slash.
    pub base_url: Arc<str>,
}

impl HttpState {
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.routes, &self.services, &self.base_url)
    }
}
