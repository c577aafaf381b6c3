use crate::errors::{AppError, AppResult};
use crate::utils::time::{is_valid_time_format, parse_time};
use serde::{Deserialize, Serialize};

/// Opening hours of a single calendar day.
///
/// When `closed` is true the `open`/`close` fields hold the "00:00"
/// placeholder and are ignored by every consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayHours {
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl DayHours {
    /// Build an open day, rejecting malformed or inverted times up front.
    pub fn open_at(open: &str, close: &str) -> AppResult<Self> {
        let hours = Self {
            open: open.to_string(),
            close: close.to_string(),
            closed: false,
        };
        hours.validate()?;
        Ok(hours)
    }

    pub fn closed_all_day() -> Self {
        Self {
            open: "00:00".to_string(),
            close: "00:00".to_string(),
            closed: true,
        }
    }

    /// Invariants for an open day: both times are well-formed 24-hour HH:MM
    /// and opening strictly precedes closing. Overnight spans are rejected.
    pub fn validate(&self) -> AppResult<()> {
        if self.closed {
            return Ok(());
        }
        if !is_valid_time_format(&self.open) {
            return Err(AppError::InvalidTime(self.open.clone()));
        }
        if !is_valid_time_format(&self.close) {
            return Err(AppError::InvalidTime(self.close.clone()));
        }
        match (parse_time(&self.open), parse_time(&self.close)) {
            (Some(open), Some(close)) if open < close => Ok(()),
            _ => Err(AppError::InvalidSchedule(format!(
                "opening time {} must be before closing time {}",
                self.open, self.close
            ))),
        }
    }

    pub fn is_open_day(&self) -> bool {
        !self.closed
    }
}
