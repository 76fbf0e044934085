//! Property-Based Tests for Filters
//!
//! Checks the debounce, block-average, multiplexer and gear filters across
//! generated raw signals.

use cluster_filters::prelude::*;

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn debounce_short_pulse_never_commits(
            pulse_ms in 1u32..20,
            gap_ms in 1u32..50,
            repeats in 1usize..20,
        ) {
            let config = DebounceConfig::default();
            let mut state = InputState::new();
            for _ in 0..repeats {
                for _ in 0..pulse_ms {
                    prop_assert_eq!(debounce_filter(&mut state, true, 1, &config), None);
                }
                for _ in 0..gap_ms {
                    prop_assert_eq!(debounce_filter(&mut state, false, 1, &config), None);
                }
            }
            prop_assert!(!state.is_pressed());
        }

        #[test]
        fn debounce_steady_level_commits_exactly_once(
            steady_ms in 20u32..2000,
            step_ms in 1u32..5,
        ) {
            let config = DebounceConfig::default();
            let mut state = InputState::new();
            let mut edges = 0usize;
            let mut elapsed = 0u32;
            while elapsed < steady_ms {
                if debounce_filter(&mut state, true, step_ms, &config).is_some() {
                    edges += 1;
                }
                elapsed += step_ms;
            }
            prop_assert_eq!(edges, 1);
            prop_assert!(state.is_pressed());
        }

        #[test]
        fn timers_never_exceed_ceiling(
            levels in proptest::collection::vec((any::<bool>(), 0u32..500), 1..200),
        ) {
            let config = DebounceConfig::new(20, 1_000);
            let mut state = InputState::new();
            for (raw, elapsed) in levels {
                debounce_filter(&mut state, raw, elapsed, &config);
                prop_assert!(state.hold_ms <= 1_000);
                prop_assert!(state.release_ms <= 1_000);
            }
        }

        #[test]
        fn rescale_is_bounded_and_monotonic(a in 0u16..=1023, b in 0u16..=1023) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rescale(hi) <= 100);
            prop_assert!(rescale(lo) <= rescale(hi));
        }

        #[test]
        fn constant_signal_averages_to_its_rescale(raw in 0u16..=1023, epoch in 1u32..512) {
            let mut state = InputState::new();
            for _ in 0..epoch {
                analog_accumulate(&mut state, raw);
            }
            analog_epoch_filter(&mut state, epoch, false);
            prop_assert_eq!(state.last_value, rescale(raw));
            prop_assert_eq!(state.accumulator, 0);
        }

        #[test]
        fn mux_selected_moves_by_physical_delta(
            seeded in 0u16..=1023,
            moved in 0u16..=1023,
        ) {
            let mut mux: FakeMux = FakeMux::new();
            mux.update(seeded);
            let channel_zero = mux.read(0);
            mux.advance();

            // Knob unchanged across the selector change
            mux.update(seeded);
            let before = mux.read(1);
            mux.update(moved);

            let expected = (i32::from(before) + i32::from(moved) - i32::from(seeded))
                .clamp(0, 1023);
            prop_assert_eq!(i32::from(mux.read(1)), expected);
            prop_assert_eq!(mux.read(0), channel_zero);
            prop_assert_eq!(mux.read(2), 0);
        }

        #[test]
        fn gear_episode_reports_at_most_once(
            pattern in proptest::collection::vec((any::<bool>(), 1u32..400), 1..30),
        ) {
            let debounce = DebounceConfig::default();
            let timing = GearTiming::default();
            let mut state = InputState::new();
            let mut reports = 0usize;
            let mut presses = 0usize;

            for (raw, ms) in pattern {
                for _ in 0..ms {
                    let edge = debounce_filter(&mut state, raw, 1, &debounce);
                    if edge == Some(Transition::Pressed) {
                        presses += 1;
                    }
                    if gear_filter(&mut state, edge, &timing) {
                        reports += 1;
                        state.clear_report();
                        prop_assert_eq!(state.click_count, 0);
                    }
                }
            }
            prop_assert!(reports <= presses);
        }
    }
}
