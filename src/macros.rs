// ============================================================================
// tick-signals - Macros
// ============================================================================

// Trace output for state transitions inside combinators.
//
// - `defmt` feature outside tests: forwarded to defmt
// - host unit tests: printed to stdout (no defmt logger is linked there)
// - everything else: compiled out
//
// Messages only carry non-generic arguments so no `Format` bound leaks onto
// combinator signatures.

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::trace!($($arg)*);

        #[cfg(test)]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::debug!($($arg)*);

        #[cfg(test)]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Left-biased merge of any number of signals of the same type.
///
/// Expands to nested [`merge`](crate::merge) calls, so the first present
/// signal in argument order wins.
///
/// # Usage
///
/// ```rust
/// use tick_signals::{merge, Signal};
///
/// let manual: Signal<u8> = Signal::Absent;
/// let remote = Signal::Present(2);
/// let fallback = Signal::Present(3);
///
/// assert_eq!(merge!(manual, remote, fallback), Signal::Present(2));
/// ```
#[macro_export]
macro_rules! merge {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::merge($first, $crate::merge!($($rest),+))
    };
}
