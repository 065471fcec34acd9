use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How a practice repeats after its first occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceKind {
    #[default]
    None,
    Weekly,
    /// Same day-of-month every month.
    MonthlyByDate,
    /// Same ordinal weekday every month, e.g. "2nd Thursday".
    MonthlyByNthWeekday,
}

impl RecurrenceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Weekly => "weekly",
            Self::MonthlyByDate => "monthly_by_date",
            Self::MonthlyByNthWeekday => "monthly_by_nth_weekday",
        }
    }

    #[must_use]
    pub const fn is_recurring(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecurrenceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Self::None),
            "weekly" => Ok(Self::Weekly),
            "monthly_by_date" => Ok(Self::MonthlyByDate),
            "monthly_by_nth_weekday" => Ok(Self::MonthlyByNthWeekday),
            other => Err(CoreError::InvalidInput(format!(
                "unsupported recurrence type: {other}"
            ))),
        }
    }
}
