use crate::error::WorkoutError;
use crate::kind::WorkoutKind;
use crate::report::InfoMessage;
use crate::utils::floor_div;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Distance per action over `len_step` metres, in km.
#[allow(clippy::cast_precision_loss)]
fn stride_distance(action: i64, len_step: f64) -> f64 {
    action as f64 * len_step / M_IN_KM
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action: i64,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    pub const LEN_STEP: f64 = 0.65;
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub const fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    pub fn distance(&self) -> f64 {
        stride_distance(self.action, Self::LEN_STEP)
    }

    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.duration
    }

    pub fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: i64,
    pub duration: f64,
    pub weight: f64,
    /// Height in cm.
    pub height: f64,
}

impl SportsWalking {
    pub const LEN_STEP: f64 = 0.65;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub const fn new(action: i64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }

    pub fn distance(&self) -> f64 {
        stride_distance(self.action, Self::LEN_STEP)
    }

    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.duration
    }

    /// The squared speed is floor-divided by height, so the second term only
    /// kicks in once `speed^2 >= height`.
    pub fn spent_calories(&self) -> f64 {
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action: i64,
    pub duration: f64,
    pub weight: f64,
    /// Pool length in metres.
    pub length_pool: f64,
    pub count_pool: i64,
}

impl Swimming {
    /// One stroke, in metres.
    pub const LEN_STEP: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(
        action: i64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: i64,
    ) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }

    pub fn distance(&self) -> f64 {
        stride_distance(self.action, Self::LEN_STEP)
    }

    /// Derived from pool geometry, not from the stroke count.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.duration
    }

    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
    }
}

/// One workout built from a sensor package.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Walking(_) => WorkoutKind::Walking,
            Self::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub const fn label(&self) -> &'static str {
        self.kind().label()
    }

    pub const fn duration(&self) -> f64 {
        match self {
            Self::Running(w) => w.duration,
            Self::Walking(w) => w.duration,
            Self::Swimming(w) => w.duration,
        }
    }

    /// Distance in km.
    pub fn distance(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance(),
            Self::Walking(w) => w.distance(),
            Self::Swimming(w) => w.distance(),
        }
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed(),
            Self::Walking(w) => w.mean_speed(),
            Self::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.spent_calories(),
            Self::Walking(w) => w.spent_calories(),
            Self::Swimming(w) => w.spent_calories(),
        }
    }

    /// Build the report line values.
    ///
    /// Float division never traps, so a zero duration or height shows up
    /// here as a non-finite value and is returned as [`WorkoutError::NumericFault`].
    pub fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
        let label = self.label();
        let fields = [
            ("duration", self.duration()),
            ("distance", self.distance()),
            ("speed", self.mean_speed()),
            ("calories", self.spent_calories()),
        ];

        if let Some((field, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(WorkoutError::NumericFault { label, field });
        }

        let [(_, duration), (_, distance), (_, speed), (_, calories)] = fields;
        Ok(InfoMessage::new(label, duration, distance, speed, calories))
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Self::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_running() {
        let w = Running::new(15000, 1.0, 75.0);
        assert!(approx_eq(w.distance(), 9.75));
        assert!(approx_eq(w.mean_speed(), 9.75));
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert!(approx_eq(w.spent_calories(), 699.75));
    }

    #[test]
    fn test_running_half_hour() {
        let w = Running::new(6000, 0.5, 60.0);
        assert!(approx_eq(w.distance(), 3.9));
        assert!(approx_eq(w.mean_speed(), 7.8));
        let expected = (18.0 * 7.8 - 20.0) * 60.0 / 1000.0 * 30.0;
        assert!(approx_eq(w.spent_calories(), expected));
    }

    #[test]
    fn test_walking_below_height_threshold() {
        let w = SportsWalking::new(9000, 1.0, 75.0, 180.0);
        assert!(approx_eq(w.distance(), 5.85));
        assert!(approx_eq(w.mean_speed(), 5.85));
        // 5.85^2 // 180 == 0, only the weight term remains
        assert!(approx_eq(w.spent_calories(), 0.035 * 75.0 * 60.0));
    }

    #[test]
    fn test_walking_above_height_threshold() {
        let w = SportsWalking::new(30000, 1.0, 75.0, 180.0);
        // 19.5^2 = 380.25, // 180 == 2
        let expected = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0;
        assert!(approx_eq(w.spent_calories(), expected));
    }

    #[test]
    fn test_walking_uses_floor_not_truncation() {
        let w = SportsWalking::new(9000, 1.0, 75.0, -180.0);
        // 34.2225 // -180 == -1; truncation would give 0
        let expected = (0.035 * 75.0 - 0.029 * 75.0) * 60.0;
        assert!(approx_eq(w.spent_calories(), expected));
    }

    #[test]
    fn test_swimming() {
        let w = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!(approx_eq(w.distance(), 0.9936));
        assert!(approx_eq(w.mean_speed(), 1.0));
        assert!(approx_eq(w.spent_calories(), 336.0));
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let a = Swimming::new(100, 2.0, 70.0, 50.0, 20);
        let b = Swimming::new(5000, 2.0, 70.0, 50.0, 20);
        assert!(approx_eq(a.mean_speed(), b.mean_speed()));
        assert!(approx_eq(a.mean_speed(), 0.5));
        assert!(!approx_eq(a.distance(), b.distance()));
    }

    #[test]
    fn test_distance_is_linear_in_actions() {
        for (single, double) in [
            (
                Workout::from(Running::new(1000, 1.0, 70.0)),
                Workout::from(Running::new(2000, 1.0, 70.0)),
            ),
            (
                Workout::from(SportsWalking::new(1000, 1.0, 70.0, 170.0)),
                Workout::from(SportsWalking::new(2000, 1.0, 70.0, 170.0)),
            ),
            (
                Workout::from(Swimming::new(1000, 1.0, 70.0, 25.0, 10)),
                Workout::from(Swimming::new(2000, 1.0, 70.0, 25.0, 10)),
            ),
        ] {
            assert!(approx_eq(double.distance(), 2.0 * single.distance()));
        }
        let swim = Workout::from(Swimming::new(1000, 1.0, 70.0, 25.0, 10));
        assert!(approx_eq(swim.distance(), 1.38));
    }

    #[test]
    fn test_calories_are_deterministic() {
        let w = Workout::from(SportsWalking::new(12345, 1.3, 81.5, 177.0));
        assert_eq!(w.spent_calories().to_bits(), w.spent_calories().to_bits());
    }

    #[test]
    fn test_show_training_info() {
        let info = Workout::from(Swimming::new(720, 1.0, 80.0, 25.0, 40))
            .show_training_info()
            .unwrap();
        assert_eq!(info.training_type(), "Swimming");
        assert_eq!(
            info.get_message(),
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg. speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_zero_duration_is_numeric_fault() {
        let err = Workout::from(Running::new(15000, 0.0, 75.0))
            .show_training_info()
            .unwrap_err();
        assert_eq!(
            err,
            WorkoutError::NumericFault {
                label: "Running",
                field: "speed"
            }
        );
    }

    #[test]
    fn test_zero_height_is_numeric_fault() {
        let err = Workout::from(SportsWalking::new(9000, 1.0, 75.0, 0.0))
            .show_training_info()
            .unwrap_err();
        assert_eq!(
            err,
            WorkoutError::NumericFault {
                label: "SportsWalking",
                field: "calories"
            }
        );
    }
}
