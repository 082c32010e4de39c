use std::fmt;

use strum::{AsRefStr, EnumString};

use crate::WorkoutType;

/// Language of rendered messages.
#[derive(AsRefStr, EnumString, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Metrics of a single workout, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: WorkoutType,
    /// Duration in hours.
    pub duration: f64,
    /// Distance in km.
    pub distance: f64,
    /// Mean speed in km/h.
    pub speed: f64,
    /// Energy expenditure in kcal.
    pub calories: f64,
}

impl InfoMessage {
    /// Render all numeric fields with three decimal places.
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        let InfoMessage {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;
        match locale {
            Locale::En => format!(
                "Workout type: {training_type}; \
                 Duration: {duration:.3} h; \
                 Distance: {distance:.3} km; \
                 Avg speed: {speed:.3} km/h; \
                 Calories: {calories:.3}."
            ),
            Locale::Ru => format!(
                "Тип тренировки: {training_type}; \
                 Длительность: {duration:.3} ч.; \
                 Дистанция: {distance:.3} км; \
                 Ср. скорость: {speed:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
        }
    }

    /// Whether every metric is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.duration, self.distance, self.speed, self.calories]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Locale::En))
    }
}
