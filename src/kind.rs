use crate::error::WorkoutError;
use std::fmt;
use std::str::FromStr;

/// The three workout codes a tracker can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    Walking,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Name printed in the report line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::Walking => 4,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| WorkoutError::UnknownCode(s.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
