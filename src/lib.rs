// ============================================================================
// tick-signals - Discrete-Time Signal Combinators
// ============================================================================
//
// Allocation-free combinators for programs driven by a tick loop. Every
// combinator is a plain function over this tick's inputs; stateful ones take
// a caller-owned state cell by `&mut`.
// ============================================================================

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

//! Discrete-time signal combinators for tick-driven programs.
//!
//! A [`Signal<T>`] is the value of some input during one tick of the main
//! loop: either [`Signal::Present`] or [`Signal::Absent`]. Combinators build a
//! dataflow graph out of ordinary nested calls, evaluated once per tick.
//!
//! State that must survive between ticks (a running total, the last value
//! seen, a history window) lives in cells the caller allocates once and
//! passes by `&mut` on every tick. Nothing is hidden in closures or globals,
//! so replaying the same inputs against freshly initialised cells always
//! reproduces the same outputs.
//!
//! # Example
//!
//! ```
//! use tick_signals::{drop_repeats, filter, fold_past, map, Signal};
//!
//! // Allocated once, before the loop starts
//! let mut last_pressed = None;
//! let mut presses: u32 = 0;
//!
//! let raw = [true, true, false, true];
//! let mut counts = Vec::new();
//! for level in raw {
//!     // One tick
//!     let edge = drop_repeats(Signal::Present(level), &mut last_pressed);
//!     let pressed = map(|_| (), filter(|l: &bool| !*l, edge));
//!     counts.push(fold_past(|_, n: &u32| n + 1, &mut presses, pressed));
//! }
//!
//! assert_eq!(presses, 2);
//! assert_eq!(counts[1], Signal::Absent);
//! ```
//!
//! # Modules
//!
//! - [`core`](crate::core): the value model ([`Signal`], [`Either`]) and equality functions
//! - [`collections`]: the fixed-capacity [`History`]
//! - [`primitives`]: every combinator, re-exported at the crate root

#[macro_use]
mod macros;

pub mod collections;
pub mod core;
pub mod primitives;

// Re-export core items at crate root for ergonomic access
pub use crate::core::either::Either;
pub use crate::core::equality::{self, EqualsFn};
pub use crate::core::signal::Signal;

pub use crate::collections::history::{CapacityError, History};

// Re-export combinators at crate root (flat function API)
pub use crate::primitives::fold::{fold_past, record};
pub use crate::primitives::hold::{drop_repeats, drop_repeats_by, latch};
pub use crate::primitives::lift::{map2, zip};
pub use crate::primitives::merge::{join, merge, merge_many};
pub use crate::primitives::toggle::toggle;
pub use crate::primitives::transform::{
    constant, filter, map, meta, sink, to_unit, unmeta, unzip,
};

// =============================================================================
// TESTS
// =============================================================================
