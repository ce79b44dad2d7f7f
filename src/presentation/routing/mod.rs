pub mod context;
pub mod dispatcher;
pub mod route;

pub use context::RenderContext;
pub use dispatcher::{Dispatch, Dispatcher, PageElement, RequestTarget};
pub use route::{ComponentRoute, RouteError, RouteParams, RouteTable, names, params};
