use std::fmt;

use crate::{InfoMessage, WorkoutType};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const LEN_STEP: f64 = 0.65;

/// Raw sensor readings shared by all workout types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSample {
    /// Number of steps or strokes.
    pub action: u32,
    /// Duration in hours.
    pub duration: f64,
    /// Body weight in kg.
    pub weight: f64,
}

/// Derived metrics of a workout.
///
/// The provided methods compute distance and mean speed from the step count and step
/// length. Workout types with a different geometry override them.
///
/// The duration is used as a divisor without any check. A zero duration results in
/// non-finite metrics.
pub trait Training: fmt::Debug {
    fn workout_type(&self) -> WorkoutType;
    fn sample(&self) -> &TrainingSample;

    /// Length of a single step or stroke in m.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.sample().action) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.sample().duration
    }

    /// Energy expenditure in kcal.
    fn spent_calories(&self) -> f64;

    #[must_use]
    fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.workout_type(),
            duration: self.sample().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub sample: TrainingSample,
}

impl Running {
    pub const CALORIE_RATIO_1: f64 = 18.0;
    pub const CALORIE_RATIO_2: f64 = 20.0;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            sample: TrainingSample {
                action,
                duration,
                weight,
            },
        }
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn sample(&self) -> &TrainingSample {
        &self.sample
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIE_RATIO_1 * self.mean_speed() - Self::CALORIE_RATIO_2) * self.sample.weight
            / M_IN_KM
            * self.sample.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub sample: TrainingSample,
    /// Body height in cm.
    pub height: f64,
}

impl SportsWalking {
    pub const CALORIE_RATIO_1: f64 = 0.035;
    pub const CALORIE_RATIO_2: f64 = 0.029;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            sample: TrainingSample {
                action,
                duration,
                weight,
            },
            height,
        }
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn sample(&self) -> &TrainingSample {
        &self.sample
    }

    // The squared speed is floor-divided by the height.
    fn spent_calories(&self) -> f64 {
        let weight = self.sample.weight;
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (Self::CALORIE_RATIO_1 * weight + speed_term * Self::CALORIE_RATIO_2 * weight)
            * (self.sample.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub sample: TrainingSample,
    /// Pool length in m.
    pub length_pool: f64,
    /// Number of pool lengths swum.
    pub count_pool: f64,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIE_RATIO_1: f64 = 1.1;
    pub const CALORIE_RATIO_2: f64 = 2.0;

    #[must_use]
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            sample: TrainingSample {
                action,
                duration,
                weight,
            },
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn sample(&self) -> &TrainingSample {
        &self.sample
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.sample.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIE_RATIO_1) * Self::CALORIE_RATIO_2 * self.sample.weight
    }
}

/// Floor division with the remainder taking the sign of the divisor.
///
/// The quotient is derived from the exact remainder, so a quotient lying just below an
/// integer is not rounded up to it.
fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut d = (a - m) / b;
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        d -= 1.0;
    }
    if d == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let f = d.floor();
    if d - f > 0.5 { f + 1.0 } else { f }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_running() {
        let running = Running::new(15000, 1.0, 75.0);
        assert_approx_eq!(running.distance(), 9.75);
        assert_approx_eq!(running.mean_speed(), 9.75);
        assert_approx_eq!(running.spent_calories(), 699.75);
    }

    #[test]
    fn test_sports_walking() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0);
        assert_approx_eq!(walking.distance(), 5.85);
        assert_approx_eq!(walking.mean_speed(), 5.85);
        assert_approx_eq!(walking.spent_calories(), 157.5);
    }

    #[rstest]
    #[case::below_height(180.0, 157.5)]
    #[case::one_height(30.0, (0.035 * 75.0 + 0.029 * 75.0) * 60.0)]
    #[case::two_heights(17.0, (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0)]
    #[case::negative_height(-180.0, (0.035 * 75.0 - 0.029 * 75.0) * 60.0)]
    fn test_sports_walking_floors_speed_term(#[case] height: f64, #[case] expected: f64) {
        // 5.85 km/h squared is 34.2225
        let walking = SportsWalking::new(9000, 1.0, 75.0, height);
        assert_approx_eq!(walking.spent_calories(), expected);
    }

    #[test]
    fn test_sports_walking_quotient_just_below_integer() {
        // 39 km/h squared is 1521, and 1521 / 1.8 is slightly below 845
        let walking = SportsWalking::new(60000, 1.0, 75.0, 1.8);
        assert_approx_eq!(
            walking.spent_calories(),
            (0.035 * 75.0 + 844.0 * 0.029 * 75.0) * 60.0
        );
    }

    #[rstest]
    #[case(34.2225, 180.0, 0.0)]
    #[case(34.2225, 17.0, 2.0)]
    #[case(34.0, 17.0, 2.0)]
    #[case(1521.0, 1.8, 844.0)]
    #[case(34.2225, -180.0, -1.0)]
    #[case(-34.2225, 180.0, -1.0)]
    #[case(-34.0, -17.0, 2.0)]
    #[case(0.0, 180.0, 0.0)]
    fn test_floor_div(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(floor_div(a, b), expected);
    }

    #[test]
    fn test_floor_div_non_finite() {
        assert!(floor_div(f64::INFINITY, 180.0).is_nan());
        assert!(floor_div(34.2225, 0.0).is_nan());
    }

    #[test]
    fn test_swimming() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
        assert_approx_eq!(swimming.distance(), 0.9936);
        assert_approx_eq!(swimming.mean_speed(), 1.0);
        assert_approx_eq!(swimming.spent_calories(), 336.0);
    }

    #[test]
    fn test_swimming_speed_is_independent_of_strokes() {
        assert_approx_eq!(
            Swimming::new(100, 2.0, 80.0, 50.0, 40.0).mean_speed(),
            Swimming::new(5000, 2.0, 80.0, 50.0, 40.0).mean_speed()
        );
    }

    #[rstest]
    fn test_distance_is_not_negative(#[values(0, 1, 720, 9000, u32::MAX)] action: u32) {
        assert!(Running::new(action, 1.0, 75.0).distance() >= 0.0);
        assert!(SportsWalking::new(action, 1.0, 75.0, 180.0).distance() >= 0.0);
        assert!(Swimming::new(action, 1.0, 80.0, 25.0, 40.0).distance() >= 0.0);
    }

    #[test]
    fn test_zero_duration_is_not_guarded() {
        assert!(Running::new(15000, 0.0, 75.0).mean_speed().is_infinite());
        assert!(Swimming::new(720, 0.0, 80.0, 25.0, 40.0).mean_speed().is_infinite());
        assert!(!SportsWalking::new(0, 0.0, 75.0, 180.0).mean_speed().is_finite());
    }

    #[test]
    fn test_summary() {
        let summary = Running::new(15000, 1.0, 75.0).summary();
        assert_eq!(summary.training_type, WorkoutType::Running);
        assert_approx_eq!(summary.duration, 1.0);
        assert_approx_eq!(summary.distance, 9.75);
        assert_approx_eq!(summary.speed, 9.75);
        assert_approx_eq!(summary.calories, 699.75);

        let summary = Swimming::new(720, 1.0, 80.0, 25.0, 40.0).summary();
        assert_eq!(summary.training_type, WorkoutType::Swimming);
        assert_approx_eq!(summary.distance, 0.9936);
        assert_approx_eq!(summary.speed, 1.0);
        assert_approx_eq!(summary.calories, 336.0);
    }
}
