pub mod articles;
mod portfolio;
mod registry;

pub use portfolio::StaticProjectCatalog;
pub use registry::StaticArticleRegistry;
