pub mod football_operations;
pub mod operation;

pub use football_operations::{FootballOperationsService, filter_standings};
pub use operation::FootballOperations;
