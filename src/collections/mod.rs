// ============================================================================
// tick-signals - Collections Module
// Fixed-capacity storage threaded through stateful combinators
// ============================================================================

pub mod history;

pub use history::{CapacityError, History};
