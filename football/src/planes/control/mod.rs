pub mod cache_control;
pub mod operation;
pub mod sweeper;

pub use cache_control::CacheControl;
pub use operation::ControlOperations;
pub use sweeper::spawn_expiry_sweeper;
