// src/presentation/pages/mod.rs
pub mod article;
pub mod blog;
pub mod error;
mod head;
mod layout;
pub mod portfolio;

pub use head::DocumentHead;
pub use layout::app;

use maud::Markup;

use crate::application::services::ApplicationServices;
use crate::presentation::http::error::RenderResult;
use crate::presentation::routing::{RenderContext, RouteParams, RouteTable};

pub const AUTHOR: &str = "Carles Capellas";

/// Everything a page component may read while rendering.
pub struct PageProps<'a> {
    pub params: RouteParams,
    pub context: RenderContext,
    pub services: &'a ApplicationServices,
    pub routes: &'a RouteTable,
}

/// A page's body markup plus the document head it asks for.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub markup: Markup,
    pub head: DocumentHead,
}

pub type PageComponent = fn(&PageProps<'_>) -> RenderResult<RenderedPage>;
