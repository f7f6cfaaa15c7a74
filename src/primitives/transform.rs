// ============================================================================
// tick-signals - Transform Combinators
// Stateless, single-input combinators over the current tick's value
// ============================================================================

use crate::core::signal::Signal;

/// Apply `f` to the value if one is present this tick.
///
/// ```
/// use tick_signals::{map, Signal};
///
/// assert_eq!(map(|x: i32| x * 2, Signal::Present(4)), Signal::Present(8));
/// assert_eq!(map(|x: i32| x * 2, Signal::Absent), Signal::Absent);
/// ```
pub fn map<T, U>(f: impl FnOnce(T) -> U, s: Signal<T>) -> Signal<U> {
    match s {
        Signal::Present(x) => Signal::Present(f(x)),
        Signal::Absent => Signal::Absent,
    }
}

/// Drop the value when `reject` returns true for it.
///
/// Values for which `reject` is false pass through unchanged, and an absent
/// input stays absent.
///
/// ```
/// use tick_signals::{filter, Signal};
///
/// let is_noise = |x: &u16| *x < 10;
/// assert_eq!(filter(is_noise, Signal::Present(3)), Signal::Absent);
/// assert_eq!(filter(is_noise, Signal::Present(300)), Signal::Present(300));
/// ```
pub fn filter<T>(reject: impl FnOnce(&T) -> bool, s: Signal<T>) -> Signal<T> {
    match s {
        Signal::Present(x) => {
            if reject(&x) {
                Signal::Absent
            } else {
                Signal::Present(x)
            }
        }
        Signal::Absent => Signal::Absent,
    }
}

/// Run `f` for its side effects when a value is present.
///
/// The end of a dataflow graph: drive an output pin, write a register.
pub fn sink<T>(f: impl FnOnce(T), s: Signal<T>) {
    if let Signal::Present(x) = s {
        f(x);
    }
}

/// Forget the payload, keeping only whether something arrived.
pub fn to_unit<T>(s: Signal<T>) -> Signal<()> {
    map(|_| (), s)
}

/// A signal that is present every tick with `value`.
pub fn constant<T>(value: T) -> Signal<T> {
    Signal::Present(value)
}

/// Lift presence into the payload: always present, carrying the input signal.
///
/// Lets downstream combinators react to absence as an ordinary value.
pub fn meta<T>(s: Signal<T>) -> Signal<Signal<T>> {
    Signal::Present(s)
}

/// Inverse of [`meta`]: present iff the carried signal is itself present.
pub fn unmeta<T>(s: Signal<Signal<T>>) -> Signal<T> {
    match s {
        Signal::Present(inner) => inner,
        Signal::Absent => Signal::Absent,
    }
}

/// Split a signal of pairs into a pair of signals with matching presence.
pub fn unzip<A, B>(s: Signal<(A, B)>) -> (Signal<A>, Signal<B>) {
    match s {
        Signal::Present((a, b)) => (Signal::Present(a), Signal::Present(b)),
        Signal::Absent => (Signal::Absent, Signal::Absent),
    }
}

// =============================================================================
// TESTS
// =============================================================================
