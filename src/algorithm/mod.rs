/// Retrying puzzle generation over a sampled pool
pub mod assembler;
/// Greedy placement runs for a single attempt
pub mod executor;
/// Attempt-scoped placement state and legality checks
pub mod placement;
