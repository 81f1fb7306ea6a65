//! Pure stopwatch arithmetic: state transitions, lap derivation, display
//! formatting, and lap ranking. No wall-clock access; callers pass `now_ms`.

use crate::state::types::{LapTime, StopwatchState};

/// Arm the stopwatch. The start is backdated by the accumulated time so a
/// resumed stopwatch keeps counting from where it paused. Strict no-op while
/// already running: re-arming would discard the accumulated baseline.
///
/// Returns whether the state changed.
pub fn start(sw: &mut StopwatchState, now_ms: u64) -> bool {
    if sw.is_running {
        return false;
    }
    sw.start_time = Some(now_ms.saturating_sub(sw.elapsed_ms));
    sw.is_running = true;
    true
}

/// Fold the running interval into the accumulator and stop counting. No-op
/// while stopped.
pub fn stop(sw: &mut StopwatchState, now_ms: u64) -> bool {
    if !sw.is_running {
        return false;
    }
    if let Some(start) = sw.start_time {
        sw.elapsed_ms = now_ms.saturating_sub(start);
    }
    sw.is_running = false;
    sw.start_time = None;
    true
}

/// Zero the stopwatch. Valid in any state; the caller clears the lap list.
pub fn reset(sw: &mut StopwatchState) {
    *sw = StopwatchState::default();
}

/// Elapsed time for display: the accumulator plus the running interval.
pub fn display_elapsed(sw: &StopwatchState, now_ms: u64) -> u64 {
    match (sw.is_running, sw.start_time) {
        (true, Some(start)) => now_ms.saturating_sub(start),
        _ => sw.elapsed_ms,
    }
}

/// Derive the next lap record, or `None` when the stopwatch is not running.
pub fn next_lap(sw: &StopwatchState, laps: &[LapTime], now_ms: u64) -> Option<LapTime> {
    if !sw.is_running {
        return None;
    }
    let start = sw.start_time?;
    let split_ms = now_ms.saturating_sub(start);
    let previous_split = laps.last().map(|lap| lap.split_ms).unwrap_or(0);
    Some(LapTime {
        lap_number: laps.len() as u32 + 1,
        split_ms,
        lap_ms: split_ms.saturating_sub(previous_split),
    })
}

/// Fixed-width `MM:SS.CC` rendering, always base-10. Minutes do not wrap at
/// 60: 125 minutes renders as `125:00.00`.
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let hundredths = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

/// Indices of the fastest and slowest lap, for display highlighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LapExtremes {
    pub fastest: Option<usize>,
    pub slowest: Option<usize>,
}

/// First-match linear scan over `lap_ms`: the earliest lap wins ties. With
/// fewer than two laps there is nothing meaningful to rank, so both indices
/// are `None`.
pub fn lap_extremes(laps: &[LapTime]) -> LapExtremes {
    if laps.len() < 2 {
        return LapExtremes::default();
    }
    let mut fastest = 0;
    let mut slowest = 0;
    for (index, lap) in laps.iter().enumerate().skip(1) {
        if lap.lap_ms < laps[fastest].lap_ms {
            fastest = index;
        }
        if lap.lap_ms > laps[slowest].lap_ms {
            slowest = index;
        }
    }
    LapExtremes {
        fastest: Some(fastest),
        slowest: Some(slowest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(number: u32, split_ms: u64, lap_ms: u64) -> LapTime {
        LapTime {
            lap_number: number,
            split_ms,
            lap_ms,
        }
    }

    #[test]
    fn start_stop_accumulates() {
        let mut sw = StopwatchState::default();
        assert!(start(&mut sw, 1_000));
        assert!(sw.is_running);
        assert_eq!(display_elapsed(&sw, 1_500), 500);

        assert!(stop(&mut sw, 2_000));
        assert!(!sw.is_running);
        assert_eq!(sw.start_time, None);
        assert_eq!(sw.elapsed_ms, 1_000);
        // Stable after stop regardless of further reads.
        assert_eq!(display_elapsed(&sw, 9_000), 1_000);
    }

    #[test]
    fn resume_preserves_baseline() {
        let mut sw = StopwatchState::default();
        start(&mut sw, 0);
        stop(&mut sw, 400);
        start(&mut sw, 10_000);
        stop(&mut sw, 10_600);
        assert_eq!(sw.elapsed_ms, 1_000);
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut sw = StopwatchState::default();
        start(&mut sw, 1_000);
        assert!(!start(&mut sw, 5_000));
        assert_eq!(sw.start_time, Some(1_000));
        stop(&mut sw, 6_000);
        assert_eq!(sw.elapsed_ms, 5_000);
    }

    #[test]
    fn stop_while_stopped_is_noop() {
        let mut sw = StopwatchState::default();
        assert!(!stop(&mut sw, 1_000));
        assert_eq!(sw, StopwatchState::default());
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut sw = StopwatchState::default();
        start(&mut sw, 1_000);
        reset(&mut sw);
        assert_eq!(sw, StopwatchState::default());
    }

    #[test]
    fn laps_derive_from_splits() {
        let mut sw = StopwatchState::default();
        start(&mut sw, 1_000);

        let mut laps = Vec::new();
        for now in [1_100, 1_250, 1_400] {
            laps.push(next_lap(&sw, &laps, now).unwrap());
        }
        let splits: Vec<u64> = laps.iter().map(|l| l.split_ms).collect();
        let durations: Vec<u64> = laps.iter().map(|l| l.lap_ms).collect();
        let numbers: Vec<u32> = laps.iter().map(|l| l.lap_number).collect();
        assert_eq!(splits, [100, 250, 400]);
        assert_eq!(durations, [100, 150, 150]);
        assert_eq!(numbers, [1, 2, 3]);
    }

    #[test]
    fn lap_while_stopped_yields_none() {
        let sw = StopwatchState::default();
        assert_eq!(next_lap(&sw, &[], 1_000), None);
    }

    #[test]
    fn format_fixed_width() {
        assert_eq!(format_elapsed(0), "00:00.00");
        assert_eq!(format_elapsed(1_234), "00:01.23");
        assert_eq!(format_elapsed(61_000), "01:01.00");
        assert_eq!(format_elapsed(7_500_000), "125:00.00");
    }

    #[test]
    fn extremes_need_two_laps() {
        assert_eq!(lap_extremes(&[]), LapExtremes::default());
        assert_eq!(lap_extremes(&[lap(1, 100, 100)]), LapExtremes::default());
    }

    #[test]
    fn extremes_first_match_wins_ties() {
        let laps = [
            lap(1, 150, 150),
            lap(2, 240, 90),
            lap(3, 440, 200),
            lap(4, 530, 90),
        ];
        let extremes = lap_extremes(&laps);
        assert_eq!(extremes.fastest, Some(1));
        assert_eq!(extremes.slowest, Some(2));
    }
}
