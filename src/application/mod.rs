pub mod chart_service;
pub mod coordinator;
pub mod retry;
pub mod symbol_loader;

pub use chart_service::*;
pub use coordinator::*;
pub use retry::*;
pub use symbol_loader::*;
