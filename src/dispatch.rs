use crate::dlog;
use crate::error::WorkoutError;
use crate::kind::WorkoutKind;
use crate::workout::{Running, SportsWalking, Swimming, Workout};

/// One raw package as sent by the tracker: a workout code and its
/// positional readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

impl TryFrom<&Package> for Workout {
    type Error = WorkoutError;

    fn try_from(p: &Package) -> Result<Self, Self::Error> {
        read_package(&p.code, &p.data)
    }
}

/// Build a workout from a code and its readings, in declaration order:
///
/// - `SWM`: strokes, hours, weight, pool length (m), laps
/// - `RUN`: steps, hours, weight
/// - `WLK`: steps, hours, weight, height (cm)
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = code.parse()?;
    dlog!("read_package code={kind} data={data:?}");

    let workout = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Running::new(whole(kind, "action", action)?, duration, weight).into()
        }
        (WorkoutKind::Walking, &[action, duration, weight, height]) => SportsWalking::new(
            whole(kind, "action", action)?,
            duration,
            weight,
            height,
        )
        .into(),
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(
                whole(kind, "action", action)?,
                duration,
                weight,
                length_pool,
                whole(kind, "count_pool", count_pool)?,
            )
            .into()
        }
        _ => {
            return Err(WorkoutError::ArgCount {
                code: kind.code(),
                expected: kind.arity(),
                got: data.len(),
            });
        }
    };

    Ok(workout)
}

/// Counts (steps, strokes, laps) arrive as numbers but must be whole.
/// Sign and magnitude are not checked; values past the `i64` range saturate.
#[allow(clippy::cast_possible_truncation)]
fn whole(kind: WorkoutKind, field: &'static str, value: f64) -> Result<i64, WorkoutError> {
    if value.is_finite() && value.fract() == 0.0 {
        Ok(value as i64)
    } else {
        Err(WorkoutError::MalformedArgument {
            code: kind.code(),
            field,
            value,
        })
    }
}
