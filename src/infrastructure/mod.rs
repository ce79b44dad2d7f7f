pub mod content;
pub mod static_site;
