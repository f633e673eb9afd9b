pub mod anneal;
pub mod candidate;
pub mod mutation;
pub mod runner;

// Re-export specific structs for easier access
pub use self::anneal::{Annealer, RestartOutcome};
pub use self::candidate::Candidate;
pub use self::runner::{
    Optimizer, ProgressCallback, RestartReport, SearchOptions, SearchResult, Silent,
};
