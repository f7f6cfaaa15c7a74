// ============================================================================
// tick-signals - History
//
// Fixed-capacity sequence backing `record`. Storage is a `heapless::Vec`;
// capacity is part of the type and never changes.
// ============================================================================

use core::fmt;
use core::ops::Index;

use heapless::Vec;

// =============================================================================
// HISTORY<T, N>
// =============================================================================

/// A bounded sequence of at most `N` values, oldest first.
///
/// While filling, [`push`](History::push) appends. Once full, every push
/// evicts index 0, shifts the remaining values down one slot, and writes the
/// new value into the last slot. No allocation ever happens; a capacity
/// mismatch between a `History` and the code consuming it is a type error.
///
/// # Example
///
/// ```
/// use tick_signals::History;
///
/// let mut h: History<u8, 3> = History::new();
/// h.push(1);
/// h.push(2);
/// h.push(3);
/// assert_eq!(h.push(4), Some(1));
/// assert_eq!(h.as_slice(), &[2, 3, 4]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct History<T, const N: usize> {
    items: Vec<T, N>,
}

impl<T, const N: usize> History<T, N> {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a full history with every slot set to `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            items: core::iter::repeat(value).take(N).collect(),
        }
    }

    /// Create a full history from an array, index 0 being the oldest.
    pub fn from_array(items: [T; N]) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Create a history holding a copy of `values`, oldest first.
    ///
    /// Fails if `values` does not fit in `N` slots.
    pub fn try_from_slice(values: &[T]) -> Result<Self, CapacityError>
    where
        T: Clone,
    {
        Vec::from_slice(values)
            .map(|items| Self { items })
            .map_err(|_| CapacityError::TooManyItems {
                capacity: N,
                given: values.len(),
            })
    }

    /// Push a value, returning the value evicted to make room (if any).
    ///
    /// With `N == 0` there is never room, so `value` itself comes back.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.items.is_full() && !self.items.is_empty() {
            log_trace!("history: evicted oldest of {} slots", N);
            Some(self.items.remove(0))
        } else {
            None
        };
        match self.items.push(value) {
            Ok(()) => evicted,
            Err(rejected) => Some(rejected),
        }
    }

    /// A copy of this history with `value` pushed in.
    pub fn pushed(&self, value: T) -> Self
    where
        T: Clone,
    {
        let mut next = self.clone();
        next.push(value);
        next
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// The fixed capacity `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The value at `index` (0 = oldest), if filled.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The most recently pushed value.
    pub fn newest(&self) -> Option<&T> {
        self.items.last()
    }

    /// The oldest value still held.
    pub fn oldest(&self) -> Option<&T> {
        self.items.first()
    }

    /// The filled slots, oldest first.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, const N: usize> Default for History<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for History<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for History<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "defmt")]
impl<T: defmt::Format, const N: usize> defmt::Format for History<T, N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_slice())
    }
}

impl<T, const N: usize> IntoIterator for History<T, N> {
    type Item = T;
    type IntoIter = <Vec<T, N> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a History<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// CAPACITY ERROR
// =============================================================================

/// Error returned when building a [`History`] from more values than it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapacityError {
    /// More values were supplied than the history has slots.
    TooManyItems { capacity: usize, given: usize },
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityError::TooManyItems { capacity, given } => {
                write!(f, "{given} values do not fit in a history of capacity {capacity}")
            }
        }
    }
}

impl core::error::Error for CapacityError {}

// =============================================================================
// TESTS
// =============================================================================
