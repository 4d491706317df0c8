//! Temporal dimension: timestamp validation and time-scale handling.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{KlabNifiError, Result, TimeEndpoint};

/// Timestamp input at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeInput {
    /// An absolute instant.
    Absolute(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Digit-only text holding milliseconds since the Unix epoch.
    EpochMillisText(String),
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TimeInput::Absolute(dt)
    }
}

impl From<i64> for TimeInput {
    fn from(millis: i64) -> Self {
        TimeInput::EpochMillis(millis)
    }
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        TimeInput::EpochMillisText(text.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(text: String) -> Self {
        TimeInput::EpochMillisText(text)
    }
}

/// Supported time scales. Extend here as the runtime grows new units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScale {
    Year,
}

impl TimeScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeScale::Year => "year",
        }
    }

    /// Case-insensitive lookup in the supported scale set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "year" => Some(TimeScale::Year),
            _ => None,
        }
    }
}

/// Construction options for [`Time`].
#[derive(Debug, Clone)]
pub struct TimeOptions {
    /// Scale label; validated case-insensitively, stored verbatim.
    pub tunit: String,
    /// Multiplier over `tunit`.
    pub tscope: i64,
    /// Reject intervals whose start lies after their end. Off by
    /// default: the listener accepts unordered intervals.
    pub require_ordering: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            tunit: TimeScale::Year.as_str().to_string(),
            tscope: 1,
            require_ordering: false,
        }
    }
}

/// Validated temporal dimension of an observation.
///
/// Both endpoints are normalized to epoch milliseconds; that is what
/// the listener-side processors expect on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Time {
    tstart: i64,
    tend: i64,
    tunit: String,
    tscope: i64,
}

impl Time {
    /// Build a `Time` with the default options (unit `year`, scope 1).
    pub fn new(tstart: impl Into<TimeInput>, tend: impl Into<TimeInput>) -> Result<Self> {
        Self::with_options(tstart, tend, TimeOptions::default())
    }

    /// Build a `Time` with explicit options.
    pub fn with_options(
        tstart: impl Into<TimeInput>,
        tend: impl Into<TimeInput>,
        options: TimeOptions,
    ) -> Result<Self> {
        let tstart = resolve(tstart.into(), TimeEndpoint::Start)?;
        let tend = resolve(tend.into(), TimeEndpoint::End)?;

        if TimeScale::parse(&options.tunit).is_none() {
            return Err(KlabNifiError::InvalidTimeUnit(options.tunit));
        }

        if options.require_ordering && tstart > tend {
            return Err(KlabNifiError::InvalidTimestamp {
                which: TimeEndpoint::Start,
                reason: format!("start {tstart} lies after end {tend}"),
            });
        }

        Ok(Self {
            tstart,
            tend,
            tunit: options.tunit,
            tscope: options.tscope,
        })
    }

    /// Start of the interval, epoch milliseconds.
    pub fn tstart(&self) -> i64 {
        self.tstart
    }

    /// End of the interval, epoch milliseconds.
    pub fn tend(&self) -> i64 {
        self.tend
    }

    /// Scale label as supplied by the caller.
    pub fn tunit(&self) -> &str {
        &self.tunit
    }

    /// Multiplier over the scale label.
    pub fn tscope(&self) -> i64 {
        self.tscope
    }
}

/// Normalize one endpoint to epoch milliseconds.
fn resolve(input: TimeInput, which: TimeEndpoint) -> Result<i64> {
    let millis = match input {
        TimeInput::Absolute(dt) => dt.timestamp_millis(),
        TimeInput::EpochMillis(millis) => millis,
        TimeInput::EpochMillisText(text) => {
            if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(KlabNifiError::InvalidTimestamp {
                    which,
                    reason: format!("'{text}' is not a digit-only epoch-millisecond value"),
                });
            }
            text.parse::<i64>()
                .map_err(|_| KlabNifiError::InvalidTimestamp {
                    which,
                    reason: format!("'{text}' overflows the epoch-millisecond range"),
                })?
        }
    };

    // Must convert to a real calendar instant.
    if DateTime::from_timestamp_millis(millis).is_none() {
        return Err(KlabNifiError::InvalidTimestamp {
            which,
            reason: format!("{millis} is outside the representable calendar range"),
        });
    }

    Ok(millis)
}
