mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::store_with_clock;
use worldclock::state::types::ClockDisplayMode;

#[test]
fn start_advance_stop_measures_wall_delta() {
    let (_dir, store, clock) = store_with_clock(1_000);

    store.start_stopwatch();
    clock.advance(2_500);
    store.stop_stopwatch();

    let state = store.snapshot();
    assert!(!state.stopwatch.is_running);
    assert_eq!(state.stopwatch.elapsed_ms, 2_500);

    // Stable until the next start, regardless of further reads.
    clock.advance(10_000);
    assert_eq!(store.display_elapsed_ms(), 2_500);
}

#[test]
fn resume_accumulates_both_intervals() {
    let (_dir, store, clock) = store_with_clock(0);

    store.start_stopwatch();
    clock.advance(400);
    store.stop_stopwatch();

    clock.advance(60_000);
    store.start_stopwatch();
    clock.advance(600);
    store.stop_stopwatch();

    assert_eq!(store.snapshot().stopwatch.elapsed_ms, 1_000);
}

#[test]
fn start_while_running_keeps_the_baseline() {
    let (_dir, store, clock) = store_with_clock(1_000);

    store.start_stopwatch();
    clock.advance(3_000);
    store.start_stopwatch();
    clock.advance(1_000);
    store.stop_stopwatch();

    assert_eq!(store.snapshot().stopwatch.elapsed_ms, 4_000);
}

#[test]
fn reset_clears_stopwatch_and_laps() {
    let (_dir, store, clock) = store_with_clock(0);

    store.start_stopwatch();
    clock.advance(100);
    store.add_lap();
    clock.advance(100);
    store.reset_stopwatch();

    let state = store.snapshot();
    assert_eq!(state.stopwatch.elapsed_ms, 0);
    assert!(!state.stopwatch.is_running);
    assert_eq!(state.stopwatch.start_time, None);
    assert!(state.laps.is_empty());
}

#[test]
fn laps_record_splits_and_deltas() {
    let (_dir, store, clock) = store_with_clock(5_000);

    store.start_stopwatch();
    clock.advance(100);
    store.add_lap();
    clock.advance(150);
    store.add_lap();
    clock.advance(150);
    store.add_lap();

    let laps = store.snapshot().laps;
    let splits: Vec<u64> = laps.iter().map(|l| l.split_ms).collect();
    let durations: Vec<u64> = laps.iter().map(|l| l.lap_ms).collect();
    let numbers: Vec<u32> = laps.iter().map(|l| l.lap_number).collect();
    assert_eq!(splits, [100, 250, 400]);
    assert_eq!(durations, [100, 150, 150]);
    assert_eq!(numbers, [1, 2, 3]);
}

#[test]
fn lap_while_stopped_is_ignored() {
    let (_dir, store, clock) = store_with_clock(0);

    store.add_lap();
    assert!(store.snapshot().laps.is_empty());

    store.start_stopwatch();
    clock.advance(100);
    store.stop_stopwatch();
    store.add_lap();
    assert!(store.snapshot().laps.is_empty());
}

#[test]
fn display_mode_toggles_between_the_two_modes() {
    let (_dir, store, _clock) = store_with_clock(0);

    assert_eq!(store.snapshot().display_mode, ClockDisplayMode::Digital);
    store.toggle_display_mode();
    assert_eq!(store.snapshot().display_mode, ClockDisplayMode::Analog);
    store.toggle_display_mode();
    assert_eq!(store.snapshot().display_mode, ClockDisplayMode::Digital);
}

#[test]
fn unknown_zone_id_retains_previous_selection() {
    let (_dir, store, _clock) = store_with_clock(0);

    assert!(store.select_zone_by_id("JST"));
    assert!(!store.select_zone_by_id("NOT_A_ZONE"));
    assert_eq!(store.snapshot().selected_zone.id, "JST");
}

#[test]
fn saved_zone_list_never_empties() {
    let (_dir, store, _clock) = store_with_clock(0);

    // Default list holds UTC only; removing it is refused.
    assert!(!store.toggle_saved_zone("UTC"));
    assert_eq!(store.snapshot().saved_zones.len(), 1);

    assert!(store.toggle_saved_zone("CET"));
    assert_eq!(store.snapshot().saved_zones.len(), 2);

    assert!(store.toggle_saved_zone("UTC"));
    let saved = store.snapshot().saved_zones;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, "CET");

    assert!(!store.toggle_saved_zone("NOT_A_ZONE"));
}

#[test]
fn subscribers_observe_mutations() {
    let (_dir, store, _clock) = store_with_clock(0);

    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    store.subscribe(move |_state| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.toggle_display_mode();
    store.start_stopwatch();
    // No-op actions do not notify.
    store.start_stopwatch();

    assert_eq!(notified.load(Ordering::SeqCst), 2);
}
