use clap::ValueEnum;
use std::fmt;

/// Output language of the report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Computed results of one workout, ready to print. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    training_type: String,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    /// Hours.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Km.
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Km/h.
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    pub const fn calories(&self) -> f64 {
        self.calories
    }

    pub fn get_message(&self) -> String {
        self.render(Language::En)
    }

    pub fn render(&self, lang: Language) -> String {
        let Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;

        match lang {
            Language::En => format!(
                "Workout type: {training_type}; \
                 Duration: {duration:.3} h.; \
                 Distance: {distance:.3} km; \
                 Avg. speed: {speed:.3} km/h; \
                 Calories burned: {calories:.3}."
            ),
            Language::Ru => format!(
                "Тип тренировки: {training_type}; \
                 Длительность: {duration:.3} ч.; \
                 Дистанция: {distance:.3} км; \
                 Ср. скорость: {speed:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
