// ============================================================================
// tick-signals - Toggle
// Two-state flip-flop driven by event presence
// ============================================================================

use crate::core::signal::Signal;

/// Flip between `val1` and `val2` on every event.
///
/// Only presence matters: any present input moves `cell` to the other state
/// (to `val2` if it currently equals `val1`, otherwise to `val1`) and emits
/// the new state. An absent input emits nothing and leaves `cell` alone.
///
/// A cell holding neither value flips to `val1` on the first event.
///
/// ```
/// use tick_signals::{toggle, Signal};
///
/// let mut led = false;
/// let button = Signal::Present(());
/// assert_eq!(toggle(false, true, &mut led, button), Signal::Present(true));
/// assert_eq!(toggle(false, true, &mut led, button), Signal::Present(false));
/// assert_eq!(toggle(false, true, &mut led, Signal::<()>::Absent), Signal::Absent);
/// ```
pub fn toggle<T: PartialEq + Clone, E>(
    val1: T,
    val2: T,
    cell: &mut T,
    incoming: Signal<E>,
) -> Signal<T> {
    if incoming.is_absent() {
        return Signal::Absent;
    }
    *cell = if *cell == val1 { val2 } else { val1 };
    log_debug!("toggle: flipped");
    Signal::Present(cell.clone())
}
