//! Whole dataflow graphs run through a simulated main loop.

use tick_signals::{
    drop_repeats, fold_past, join, latch, map, map2, merge, record, sink, toggle, zip, Either,
    History, Signal,
};

// =============================================================================
// BLINKER: button toggles an LED, a mode knob sets the blink divisor
// =============================================================================

/// Every cell the graph needs, allocated once before the loop starts.
struct BlinkerCells {
    button_prev: Option<bool>,
    led: bool,
    divisor: u8,
    presses: u32,
}

impl BlinkerCells {
    fn new() -> Self {
        Self {
            button_prev: None,
            led: false,
            divisor: 1,
            presses: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    led: Signal<bool>,
    divisor: Signal<u8>,
    presses: Signal<u32>,
}

fn blinker_tick(cells: &mut BlinkerCells, button: Signal<bool>, knob: Signal<u8>) -> Frame {
    let edge = drop_repeats(button, &mut cells.button_prev);
    let pressed = tick_signals::filter(|down: &bool| !*down, edge);
    let led = toggle(false, true, &mut cells.led, pressed);
    let presses = fold_past(|_, n: &u32| n + 1, &mut cells.presses, pressed);
    let divisor = latch(knob, &mut cells.divisor);
    Frame {
        led,
        divisor,
        presses,
    }
}

fn run_blinker(inputs: &[(Signal<bool>, Signal<u8>)]) -> Vec<Frame> {
    let mut cells = BlinkerCells::new();
    inputs
        .iter()
        .map(|&(button, knob)| blinker_tick(&mut cells, button, knob))
        .collect()
}

fn blinker_inputs() -> Vec<(Signal<bool>, Signal<u8>)> {
    use Signal::{Absent, Present};
    vec![
        (Present(false), Absent),
        (Present(true), Absent),
        (Present(true), Present(4)),
        (Present(false), Absent),
        (Absent, Absent),
        (Present(true), Present(2)),
    ]
}

#[test]
fn blinker_reacts_to_button_edges() {
    let frames = run_blinker(&blinker_inputs());

    let leds: Vec<_> = frames.iter().map(|f| f.led).collect();
    assert_eq!(
        leds,
        [
            Signal::Absent,
            Signal::Present(true),
            Signal::Absent,
            Signal::Absent,
            Signal::Absent,
            Signal::Present(false),
        ]
    );

    let divisors: Vec<_> = frames.iter().map(|f| f.divisor.unwrap_or(0)).collect();
    assert_eq!(divisors, [1, 1, 4, 4, 4, 2]);

    assert_eq!(frames[5].presses, Signal::Present(2));
}

#[test]
fn blinker_replays_identically_from_fresh_cells() {
    assert_eq!(run_blinker(&blinker_inputs()), run_blinker(&blinker_inputs()));
}

// =============================================================================
// SENSOR FUSION: two sensors at different rates, windowed and combined
// =============================================================================

#[test]
fn sensors_at_different_rates_combine_latest() {
    let mut pair = (0i32, 0i32);
    let mut window: History<(i32, i32), 2> = History::new();
    let mut last_error = Signal::Absent;

    let fast = [1, 2, 3, 4, 5, 6].map(Signal::Present);
    let slow = [
        Signal::Present(10),
        Signal::Absent,
        Signal::Absent,
        Signal::Present(20),
        Signal::Absent,
        Signal::Absent,
    ];

    let mut errors = Vec::new();
    for (f, s) in fast.into_iter().zip(slow) {
        let error = map2(|a: &i32, b: &i32| b - a, f, s, &mut pair);
        let both = zip(f, s, &mut (0, 0));
        record(both, &mut window);
        sink(|e| errors.push(e), error);
        last_error = merge(error, last_error);
    }

    assert_eq!(errors, [9, 8, 7, 16, 15, 14]);
    assert_eq!(pair, (6, 20));
    assert_eq!(last_error, Signal::Present(14));
    // zip with a throwaway cell fills the missing side with its default
    assert_eq!(window.as_slice(), &[(5, 0), (6, 0)]);
}

#[test]
fn join_routes_two_command_sources() {
    let mut heading = 0i32;
    let commands = [
        (Signal::Present(90), Signal::Absent),
        (Signal::Absent, Signal::Present(-10)),
        (Signal::Present(180), Signal::Present(5)),
        (Signal::Absent, Signal::Absent),
    ];

    let out: Vec<_> = commands
        .into_iter()
        .map(|(absolute, relative)| {
            let cmd = join(absolute, relative);
            let target = map(
                |c: Either<i32, i32>| c.either(|abs| abs, |rel| heading + rel),
                cmd,
            );
            latch(target, &mut heading)
        })
        .collect();

    assert_eq!(
        out,
        [
            Signal::Present(90),
            Signal::Present(80),
            Signal::Present(180),
            Signal::Present(180),
        ]
    );
}

#[test]
fn merge_macro_prioritises_sources() {
    let manual: Signal<u16> = Signal::Absent;
    let autopilot = Signal::Present(1500);
    let failsafe = Signal::Present(1000);

    assert_eq!(tick_signals::merge!(manual, autopilot, failsafe), Signal::Present(1500));
    assert_eq!(tick_signals::merge!(Signal::Present(1200), autopilot), Signal::Present(1200));
}
