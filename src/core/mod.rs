// ============================================================================
// tick-signals - Core Module
// The per-tick value model and the types combinators exchange
// ============================================================================

pub mod either;
pub mod equality;
pub mod signal;

// Re-export commonly used items
pub use either::Either;
pub use equality::EqualsFn;
pub use signal::Signal;
