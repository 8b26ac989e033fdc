pub mod dispatch;
pub mod draft_ops;
pub mod log_ops;
pub mod store;

pub use dispatch::Dispatcher;
pub use store::Store;
