// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A submission wall-clock time with second precision, local timezone.
///
/// The canonical text form is `YYYY-MM-DD HH:MM:SS`, which is also the on-disk
/// format. The wrapped string is kept exactly as constructed so persisted
/// documents round-trip byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    value: String,
}

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Result<Self, TimestampError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TimestampError::Empty);
        }
        NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT)
            .map_err(|_| TimestampError::Format)?;
        Ok(Self { value })
    }

    pub fn from_datetime(datetime: DateTime<Local>) -> Self {
        Self {
            value: datetime.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// The current local time, truncated to second precision.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    Empty,
    Format,
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("timestamp must not be empty"),
            Self::Format => f.write_str("timestamp must match YYYY-MM-DD HH:MM:SS"),
        }
    }
}

impl std::error::Error for TimestampError {}

/// One submitted question.
///
/// The text is stored raw; display escaping is the view layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    submitted_at: Timestamp,
}

impl Question {
    pub fn new(text: impl Into<String>, submitted_at: Timestamp) -> Self {
        Self {
            text: text.into(),
            submitted_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }
}

#[cfg(test)]
mod tests {
    use super::{Timestamp, TimestampError};

    #[test]
    fn accepts_canonical_form() {
        let timestamp = Timestamp::new("2024-03-02 18:45:10").expect("timestamp");
        assert_eq!(timestamp.as_str(), "2024-03-02 18:45:10");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Timestamp::new("").unwrap_err(), TimestampError::Empty);
    }

    #[test]
    fn rejects_other_shapes() {
        for raw in ["yesterday", "2024-03-02", "2024-03-02T18:45:10", "18:45:10"] {
            assert_eq!(
                Timestamp::new(raw).unwrap_err(),
                TimestampError::Format,
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn now_round_trips_through_validation() {
        let now = Timestamp::now();
        let reparsed = Timestamp::new(now.as_str().to_owned()).expect("reparse");
        assert_eq!(now, reparsed);
    }
}
