pub mod articles;
pub mod portfolio;
