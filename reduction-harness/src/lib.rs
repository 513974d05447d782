pub mod array;
pub mod bench;
pub mod config;
pub mod errors;
pub mod state;
pub mod stats;
pub mod verify;

pub use array::Array;
pub use bench::run;
pub use config::RunConfig;
pub use errors::HarnessError;
pub use state::State;
pub use stats::IterationStats;
