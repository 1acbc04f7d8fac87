use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use yew::Reducible;

/// How often a mounted countdown recomputes its state.
pub const TICK_MILLIS: u32 = 1_000;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Remaining time until a target, split into display units.
///
/// `hours`, `minutes` and `seconds` never exceed 23, 59 and 59. `days` is
/// unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    pub const ZERO: CountdownState = CountdownState {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Value/label pairs in display order.
    pub fn units(&self) -> [(u64, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hrs"),
            (self.minutes, "Min"),
            (self.seconds, "Sec"),
        ]
    }
}

/// Zero-pads a unit to two digits. Wider values are kept whole.
pub fn pad(value: u64) -> String {
    format!("{:02}", value)
}

/// Whole seconds from `now` until `target`, floored, never negative.
pub fn remaining_seconds<A: TimeZone, B: TimeZone>(target: &DateTime<A>, now: &DateTime<B>) -> u64 {
    let distance_ms = target.timestamp_millis().saturating_sub(now.timestamp_millis());
    if distance_ms <= 0 {
        0
    } else {
        (distance_ms / 1_000) as u64
    }
}

/// Breaks the time left until `target` into days, hours, minutes and seconds.
/// A target at or before `now` yields the zero state.
pub fn remaining<A: TimeZone, B: TimeZone>(target: &DateTime<A>, now: &DateTime<B>) -> CountdownState {
    match remaining_seconds(target, now) {
        0 => CountdownState::ZERO,
        total => CountdownState::from_seconds(total),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Counting,
    Elapsed,
}

impl Phase {
    pub fn at<A: TimeZone, B: TimeZone>(target: &DateTime<A>, now: &DateTime<B>) -> Self {
        if target.timestamp_millis() <= now.timestamp_millis() {
            Phase::Elapsed
        } else {
            Phase::Counting
        }
    }
}

pub enum CountdownAction {
    Tick(DateTime<Utc>),
    /// Swap in a new target, e.g. when the component's props change.
    Reset {
        target: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}

/// Live countdown state for a single fixed target.
#[derive(Clone, Debug, PartialEq)]
pub struct CountdownModel {
    pub target: DateTime<Utc>,
    pub state: CountdownState,
    pub phase: Phase,
}

impl CountdownModel {
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            target,
            state: remaining(&target, &now),
            phase: Phase::at(&target, &now),
        }
    }
}

impl Reducible for CountdownModel {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick(now) => {
                // Elapsed is terminal for a fixed target.
                if self.phase == Phase::Elapsed {
                    return self;
                }
                let next = CountdownModel::new(self.target, now);
                if next == *self {
                    self
                } else {
                    Rc::new(next)
                }
            }
            CountdownAction::Reset { target, now } => {
                let next = CountdownModel::new(target, now);
                if next == *self {
                    self
                } else {
                    Rc::new(next)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
            .and_utc()
    }

    fn total_seconds(s: &CountdownState) -> u64 {
        s.days * SECONDS_PER_DAY + s.hours * SECONDS_PER_HOUR + s.minutes * SECONDS_PER_MINUTE + s.seconds
    }

    fn state(days: u64, hours: u64, minutes: u64, seconds: u64) -> CountdownState {
        CountdownState { days, hours, minutes, seconds }
    }

    #[test]
    fn two_seconds_before_target() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let now = at(2025, 6, 6, 23, 59, 58);
        assert_eq!(remaining(&target, &now), state(0, 0, 0, 2));
    }

    #[test]
    fn day_after_target_is_zero() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let now = at(2025, 6, 8, 0, 0, 0);
        assert_eq!(remaining(&target, &now), CountdownState::ZERO);
    }

    #[test]
    fn exactly_at_target_is_zero() {
        let target = at(2025, 6, 7, 0, 0, 0);
        assert_eq!(remaining(&target, &target), CountdownState::ZERO);
        assert_eq!(Phase::at(&target, &target), Phase::Elapsed);
    }

    #[test]
    fn two_whole_days() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let now = at(2025, 6, 5, 0, 0, 0);
        assert_eq!(remaining(&target, &now), state(2, 0, 0, 0));
    }

    #[test]
    fn mixed_units() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let now = at(2025, 6, 3, 20, 45, 30);
        assert_eq!(remaining(&target, &now), state(3, 3, 14, 30));
    }

    #[test]
    fn sub_second_remainder_is_floored() {
        let target = at(2025, 6, 7, 0, 0, 0);
        assert_eq!(remaining_seconds(&target, &(target - Duration::milliseconds(999))), 0);
        assert_eq!(remaining_seconds(&target, &(target - Duration::milliseconds(1_999))), 1);
        // Not yet elapsed even though every unit reads zero.
        assert_eq!(Phase::at(&target, &(target - Duration::milliseconds(500))), Phase::Counting);
    }

    #[test]
    fn timezone_of_either_side_does_not_matter() {
        let target = at(2025, 6, 7, 0, 0, 0).with_timezone(&chrono_tz::Asia::Kolkata);
        let now = at(2025, 6, 6, 23, 0, 0);
        assert_eq!(remaining(&target, &now), state(0, 1, 0, 0));
    }

    #[test]
    fn decomposition_recomposes_and_stays_in_bounds() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let mut now = at(2025, 5, 1, 7, 13, 2);
        while now < target {
            let expected = remaining_seconds(&target, &now);
            let got = remaining(&target, &now);
            assert_eq!(total_seconds(&got), expected);
            assert!(got.hours <= 23);
            assert!(got.minutes <= 59);
            assert!(got.seconds <= 59);
            now = now + Duration::seconds(3_607);
        }
    }

    #[test]
    fn every_millisecond_around_target() {
        let target = at(2025, 6, 7, 0, 0, 0);
        for offset_ms in -5_000i64..=200_000 {
            let now = target - Duration::milliseconds(offset_ms);
            let got = remaining(&target, &now);
            let expected = if offset_ms <= 0 { 0 } else { (offset_ms / 1_000) as u64 };
            assert_eq!(total_seconds(&got), expected, "offset {} ms", offset_ms);
            assert!(got.hours <= 23 && got.minutes <= 59 && got.seconds <= 59);
            if offset_ms <= 0 {
                assert_eq!(got, CountdownState::ZERO);
            }
        }
    }

    #[test]
    fn one_second_step_decrements_by_one_until_zero() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let mut now = target - Duration::seconds(90);
        let mut previous = remaining_seconds(&target, &now);
        for _ in 0..120 {
            now = now + Duration::seconds(1);
            let current = remaining_seconds(&target, &now);
            if previous == 0 {
                assert_eq!(current, 0);
            } else {
                assert_eq!(current, previous - 1);
            }
            previous = current;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn far_targets_do_not_overflow() {
        let now = at(2025, 6, 7, 0, 0, 0);
        let far = DateTime::<Utc>::MAX_UTC;
        assert!(remaining(&far, &now).days > 365 * 1_000);
        assert_eq!(remaining(&DateTime::<Utc>::MIN_UTC, &now), CountdownState::ZERO);
    }

    #[test]
    fn units_and_padding() {
        let s = state(123, 4, 5, 0);
        let rendered: Vec<(String, &str)> = s.units().iter().map(|(v, l)| (pad(*v), *l)).collect();
        assert_eq!(
            rendered,
            vec![
                ("123".to_string(), "Days"),
                ("04".to_string(), "Hrs"),
                ("05".to_string(), "Min"),
                ("00".to_string(), "Sec"),
            ]
        );
    }

    #[test]
    fn tick_moves_counting_model_forward() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let model = Rc::new(CountdownModel::new(target, target - Duration::seconds(3)));
        let model = model.reduce(CountdownAction::Tick(target - Duration::seconds(2)));
        assert_eq!(model.state, state(0, 0, 0, 2));
        assert_eq!(model.phase, Phase::Counting);

        let model = model.reduce(CountdownAction::Tick(target));
        assert_eq!(model.state, CountdownState::ZERO);
        assert_eq!(model.phase, Phase::Elapsed);
    }

    #[test]
    fn elapsed_model_ignores_ticks() {
        let target = at(2025, 6, 7, 0, 0, 0);
        let model = Rc::new(CountdownModel::new(target, target + Duration::seconds(5)));
        assert_eq!(model.phase, Phase::Elapsed);

        // Even a clock that jumps backwards cannot revive it.
        let next = model.clone().reduce(CountdownAction::Tick(target - Duration::days(1)));
        assert!(Rc::ptr_eq(&model, &next));
        assert_eq!(next.state, CountdownState::ZERO);
    }

    #[test]
    fn unchanged_tick_keeps_same_rc() {
        let target = at(2025, 6, 7, 0, 0, 0);
        // 9.9 s and 9.7 s left both floor to 9.
        let now = target - Duration::milliseconds(9_900);
        let model = Rc::new(CountdownModel::new(target, now));
        let next = model.clone().reduce(CountdownAction::Tick(now + Duration::milliseconds(200)));
        assert!(Rc::ptr_eq(&model, &next));
    }

    #[test]
    fn reset_switches_target() {
        let first = at(2025, 6, 7, 0, 0, 0);
        let second = at(2025, 7, 7, 0, 0, 0);
        let now = at(2025, 6, 8, 0, 0, 0);
        let model = Rc::new(CountdownModel::new(first, now));
        assert_eq!(model.phase, Phase::Elapsed);

        let model = model.reduce(CountdownAction::Reset { target: second, now });
        assert_eq!(model.target, second);
        assert_eq!(model.phase, Phase::Counting);
        assert_eq!(model.state, state(29, 0, 0, 0));
    }
}
