// Tick actions and how they mutate display state
use crate::domain::view::ViewState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickAction {
    /// `value += (r - 0.5) * delta` on the sensor titled `title`
    SensorDrift { title: String, delta: f64 },
    /// `xp = min(xp + floor(r * max_gain), max_xp)` on the header stats
    HeaderXp { max_gain: u32 },
}

/// Apply one tick. Returns true if the state changed, in which case
/// `tick_count` and `updated_at` move too.
pub fn apply_tick(state: &mut ViewState, action: &TickAction, rng: &mut dyn RandomSource) -> bool {
    let changed = match action {
        TickAction::SensorDrift { title, delta } => match state.sensor_mut(title) {
            Some(sensor) => {
                let step = (rng.next_unit() - 0.5) * delta;
                sensor.nudge(step)
            }
            None => false,
        },
        TickAction::HeaderXp { max_gain } => {
            let gain = (rng.next_unit() * f64::from(*max_gain)).floor() as u32;
            state.header.award_xp(gain)
        }
    };

    if changed {
        state.tick_count += 1;
        state.touch();
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sensor::{SensorReading, SensorStatus, Trend};
    use crate::domain::view::ViewKind;

    fn dashboard_state() -> ViewState {
        let mut state = ViewState::empty(ViewKind::Dashboard);
        state.sensors = vec![
            SensorReading::new("Avg Temperature", "22.5", "°C", SensorStatus::Online, Trend::Up, "+0.3°"),
            SensorReading::new("Humidity", "68", "%", SensorStatus::Online, Trend::Stable, "±2%"),
            SensorReading::new("Wave Height", "1.8", "m", SensorStatus::Warning, Trend::Up, "+0.4m"),
        ];
        state
    }

    fn drift() -> TickAction {
        TickAction::SensorDrift {
            title: "Avg Temperature".to_string(),
            delta: 0.2,
        }
    }

    #[test]
    fn test_sensor_drift_stays_within_step() {
        let mut state = dashboard_state();
        let seed = state.sensors[0].numeric_value().unwrap();
        let others = state.sensors[1..].to_vec();
        let mut rng = ThreadRandom::seeded(7);

        let ticks = 25;
        for _ in 0..ticks {
            assert!(apply_tick(&mut state, &drift(), &mut rng));
        }

        let value = state.sensors[0].numeric_value().unwrap();
        // Each tick moves at most 0.1 plus up to 0.05 of display rounding
        assert!((value - seed).abs() <= ticks as f64 * 0.15);
        assert_eq!(state.sensors[1..], others[..]);
        assert_eq!(state.tick_count, ticks);
    }

    #[test]
    fn test_sensor_drift_extremes() {
        let mut state = dashboard_state();
        let mut rng = SequenceRandom::new(vec![0.999, 0.0]);

        apply_tick(&mut state, &drift(), &mut rng);
        assert_eq!(state.sensors[0].value, "22.6");

        apply_tick(&mut state, &drift(), &mut rng);
        assert_eq!(state.sensors[0].value, "22.5");
    }

    #[test]
    fn test_sensor_drift_accumulates_deltas() {
        let mut state = dashboard_state();
        let mut rng = SequenceRandom::new(vec![0.0]);

        for _ in 0..10 {
            apply_tick(&mut state, &drift(), &mut rng);
        }
        assert_eq!(state.sensors[0].value, "21.5");
        assert_eq!(state.tick_count, 10);
    }

    #[test]
    fn test_sensor_drift_unknown_title() {
        let mut state = dashboard_state();
        let before = state.clone();
        let action = TickAction::SensorDrift {
            title: "Salinity".to_string(),
            delta: 0.2,
        };

        assert!(!apply_tick(&mut state, &action, &mut SequenceRandom::new(vec![0.9])));
        assert_eq!(state, before);
    }

    #[test]
    fn test_header_xp_gain() {
        let mut state = dashboard_state();
        let mut rng = SequenceRandom::new(vec![0.95, 0.05]);
        let action = TickAction::HeaderXp { max_gain: 10 };

        assert!(apply_tick(&mut state, &action, &mut rng));
        assert_eq!(state.header.xp, 2459);

        // floor(0.05 * 10) == 0
        assert!(!apply_tick(&mut state, &action, &mut rng));
        assert_eq!(state.header.xp, 2459);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_sequence_random_cycles() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(SequenceRandom::new(Vec::new()).next_unit(), 0.5);
    }
}
