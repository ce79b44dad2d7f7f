pub mod entity;
pub mod repository;

pub use entity::{DemoLink, ImageOrientation, Project, ProjectSection};
pub use repository::ProjectRepository;
