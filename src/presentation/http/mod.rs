// src/presentation/http/mod.rs
pub mod error;
pub mod routes;
pub mod ssr;
pub mod state;
pub mod template;
