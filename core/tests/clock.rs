//! Simulated-hour derivation tests.

use solarfield_core::clock::SimClock;

#[test]
fn hour_advances_with_whole_hour_ticks() {
    let mut clock = SimClock::new(6, 3600.0);
    assert_eq!(clock.hour_of_day(), 6);

    clock.advance();
    clock.advance();
    assert_eq!(clock.current_tick, 2);
    assert_eq!(clock.hour_of_day(), 8);
}

#[test]
fn hour_wraps_at_midnight() {
    let mut clock = SimClock::new(23, 3600.0);
    clock.advance();
    assert_eq!(clock.hour_of_day(), 0);

    clock.advance();
    assert_eq!(clock.hour_of_day(), 1);
}

#[test]
fn sub_hour_ticks_accumulate() {
    // 720 ticks of 5 simulated seconds = one hour.
    let mut clock = SimClock::new(6, 5.0);

    for _ in 0..719 {
        clock.advance();
    }
    assert_eq!(clock.hour_of_day(), 6);

    clock.advance();
    assert_eq!(clock.hour_of_day(), 7);
}
