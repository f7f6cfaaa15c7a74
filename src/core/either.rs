// ============================================================================
// tick-signals - Either
// Tagged union recording which of two sources supplied a value
// ============================================================================

/// One of two values, tagged by the side it came from.
///
/// Produced by [`join`](crate::join), where `Left` means the first signal
/// supplied the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, if this is `Left`.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right value, if this is `Right`.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Collapse both arms into one type.
    ///
    /// ```
    /// use tick_signals::Either;
    ///
    /// let e: Either<u8, &str> = Either::Right("abc");
    /// assert_eq!(e.either(|n| n as usize, |s| s.len()), 3);
    /// ```
    pub fn either<U>(self, on_left: impl FnOnce(L) -> U, on_right: impl FnOnce(R) -> U) -> U {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}
