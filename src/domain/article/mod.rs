pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleContent, ArticleMetadata, ContentResolver};
pub use repository::{ArticleNeighbours, ArticleReadRepository};
pub use specifications::ContentCompletenessSpec;
pub use value_objects::{ArticleCategory, ArticleId, Language};
