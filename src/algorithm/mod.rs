/// Depth-first carving state machine
pub mod generator;
/// Random index sources for neighbor selection
pub mod random;
