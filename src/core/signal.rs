// ============================================================================
// tick-signals - Signal Value Model
// The value present (or absent) at a single tick
// ============================================================================

// =============================================================================
// SIGNAL<T>
// =============================================================================

/// The value of a signal during exactly one tick.
///
/// A signal either carries a value this tick or carries nothing. It is not a
/// queue: a signal holds at most one pending value and is rebuilt every tick.
/// Every combinator returns a fresh `Signal`; none mutate one in place.
///
/// # Example
///
/// ```
/// use tick_signals::Signal;
///
/// let s = Signal::Present(3);
/// assert!(s.is_present());
/// assert_eq!(s.value(), Some(&3));
///
/// let none: Signal<i32> = Signal::Absent;
/// assert_eq!(none.unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal<T> {
    /// A value arrived this tick.
    Present(T),
    /// Nothing arrived this tick.
    Absent,
}

impl<T> Signal<T> {
    /// True if the signal carries a value this tick.
    pub fn is_present(&self) -> bool {
        matches!(self, Signal::Present(_))
    }

    /// True if the signal carries nothing this tick.
    pub fn is_absent(&self) -> bool {
        matches!(self, Signal::Absent)
    }

    /// Borrow the payload without consuming the signal.
    pub fn as_ref(&self) -> Signal<&T> {
        match self {
            Signal::Present(x) => Signal::Present(x),
            Signal::Absent => Signal::Absent,
        }
    }

    /// The payload, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Signal::Present(x) => Some(x),
            Signal::Absent => None,
        }
    }

    /// Convert into an `Option`, dropping the signal wrapper.
    pub fn into_option(self) -> Option<T> {
        match self {
            Signal::Present(x) => Some(x),
            Signal::Absent => None,
        }
    }

    /// The payload, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Signal::Present(x) => x,
            Signal::Absent => default,
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Signal::Absent
    }
}

impl<T> From<Option<T>> for Signal<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Signal::Present(x),
            None => Signal::Absent,
        }
    }
}

impl<T> From<Signal<T>> for Option<T> {
    fn from(signal: Signal<T>) -> Self {
        signal.into_option()
    }
}

// =============================================================================
// TESTS
// =============================================================================
