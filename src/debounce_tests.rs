use std::thread::sleep;
use std::time::Duration;

use super::*;

#[test]
fn test_unarmed_debouncer_never_fires() {
    let mut debouncer = Debouncer::new(10);
    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_if_due());
}

#[test]
fn test_fires_once_after_delay() {
    let mut debouncer = Debouncer::new(10);
    debouncer.schedule();
    assert!(debouncer.is_pending());

    sleep(Duration::from_millis(20));
    assert!(debouncer.fire_if_due());
    // Deadline is consumed by the fire
    assert!(!debouncer.fire_if_due());
    assert!(!debouncer.is_pending());
}

#[test]
fn test_rescheduling_resets_the_deadline() {
    // Keystrokes arriving faster than the delay keep pushing the deadline
    // out; only the final settled one fires.
    let mut debouncer = Debouncer::new(40);
    let mut fires = 0;

    for _ in 0..5 {
        debouncer.schedule();
        sleep(Duration::from_millis(5));
        if debouncer.fire_if_due() {
            fires += 1;
        }
    }
    assert_eq!(fires, 0, "no keystroke paused long enough to fire");

    sleep(Duration::from_millis(60));
    if debouncer.fire_if_due() {
        fires += 1;
    }
    assert_eq!(fires, 1, "exactly one fire for the settled query");
}

#[test]
fn test_cancel_drops_pending_deadline() {
    let mut debouncer = Debouncer::new(5);
    debouncer.schedule();
    debouncer.cancel();

    sleep(Duration::from_millis(15));
    assert!(!debouncer.fire_if_due());
}

#[test]
fn test_flush_fires_immediately() {
    let mut debouncer = Debouncer::new(60_000);
    debouncer.schedule();
    assert!(debouncer.flush());
    assert!(!debouncer.is_pending());
}

#[test]
fn test_flush_without_pending_is_noop() {
    let mut debouncer = Debouncer::new(10);
    assert!(!debouncer.flush());
}
