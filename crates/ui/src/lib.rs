pub mod app;
pub mod context;
pub mod routes;
pub mod session;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
