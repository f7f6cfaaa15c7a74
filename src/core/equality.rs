// ============================================================================
// tick-signals - Equality Functions
// What counts as "the same value" when suppressing repeats
// ============================================================================

/// Equality function used by [`drop_repeats_by`](crate::drop_repeats_by).
///
/// A plain function pointer, so it can live in a `const` or `static` on
/// targets without closures-on-the-heap.
pub type EqualsFn<T> = fn(&T, &T) -> bool;

/// Structural equality via `PartialEq`. The default for `drop_repeats`.
///
/// ```
/// use tick_signals::equality::equals;
///
/// assert!(equals(&42, &42));
/// assert!(!equals(&42, &43));
/// ```
pub fn equals<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// Never equal: nothing is ever treated as a repeat.
pub fn never_equals<T>(_a: &T, _b: &T) -> bool {
    false
}

/// Always equal: after the first value, everything is a repeat.
pub fn always_equals<T>(_a: &T, _b: &T) -> bool {
    true
}

// =============================================================================
// NaN-SAFE FLOAT EQUALITY
// =============================================================================

/// f64 equality where NaN equals NaN.
///
/// Sensor readings that go NaN and stay NaN should count as repeats, which
/// IEEE 754 `==` would never report.
///
/// ```
/// use tick_signals::equality::safe_equals_f64;
///
/// assert!(safe_equals_f64(&1.0, &1.0));
/// assert!(safe_equals_f64(&f64::NAN, &f64::NAN));
/// assert!(!safe_equals_f64(&f64::NAN, &1.0));
/// ```
pub fn safe_equals_f64(a: &f64, b: &f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b
}

/// f32 equality where NaN equals NaN.
pub fn safe_equals_f32(a: &f32, b: &f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b
}
