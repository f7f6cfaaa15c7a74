// ============================================================================
// tick-signals - Primitives Module
// The combinator set: stateless transforms and merges, stateful folds,
// holds, lifts and toggles
// ============================================================================

pub mod fold;
pub mod hold;
pub mod lift;
pub mod merge;
pub mod toggle;
pub mod transform;

// Re-export for convenience
pub use fold::{fold_past, record};
pub use hold::{drop_repeats, drop_repeats_by, latch};
pub use lift::{map2, zip};
pub use merge::{join, merge, merge_many};
pub use toggle::toggle;
pub use transform::{constant, filter, map, meta, sink, to_unit, unmeta, unzip};
