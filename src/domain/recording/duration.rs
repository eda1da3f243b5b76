//! Duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// How long to wait for speech to start (5 seconds)
pub const DEFAULT_LISTEN_TIMEOUT_SECS: u64 = 5;

/// Upper bound on a single captured phrase (15 seconds)
pub const DEFAULT_PHRASE_LIMIT_SECS: u64 = 15;

/// Value object representing a non-zero time span.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    pub const fn default_listen_timeout() -> Self {
        Self::from_secs(DEFAULT_LISTEN_TIMEOUT_SECS)
    }

    pub const fn default_phrase_limit() -> Self {
        Self::from_secs(DEFAULT_PHRASE_LIMIT_SECS)
    }

    /// Whole seconds, truncated
    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / 1000
    }

    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

/// Unit suffixes accepted by the parser, longest first so "ms" wins over "m"
const UNITS: &[(&str, u64)] = &[("ms", 1), ("m", 60_000), ("s", 1000)];

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse strings such as "5s", "1m", "1m30s", "800ms".
    /// Components must appear as number+unit pairs; the total must be non-zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DurationParseError {
            input: s.to_string(),
        };

        let input = s.trim().to_lowercase();
        let mut rest = input.as_str();
        let mut total_ms: u64 = 0;

        if rest.is_empty() {
            return Err(invalid());
        }

        while !rest.is_empty() {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(invalid)?;
            if digits_end == 0 {
                return Err(invalid());
            }
            let value: u64 = rest[..digits_end].parse().map_err(|_| invalid())?;
            rest = &rest[digits_end..];

            let (suffix, factor) = UNITS
                .iter()
                .find(|(suffix, _)| rest.starts_with(suffix))
                .ok_or_else(invalid)?;
            rest = &rest[suffix.len()..];

            total_ms = value
                .checked_mul(*factor)
                .and_then(|ms| total_ms.checked_add(ms))
                .ok_or_else(invalid)?;
        }

        if total_ms == 0 {
            return Err(invalid());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.milliseconds % 1000;
        let total_secs = self.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if total_secs == 0 {
            return write!(f, "{}ms", ms);
        }

        let mut out = String::new();
        if minutes > 0 {
            out.push_str(&format!("{}m", minutes));
        }
        if seconds > 0 {
            out.push_str(&format!("{}s", seconds));
        }
        if ms > 0 {
            out.push_str(&format!("{}ms", ms));
        }
        write!(f, "{}", out)
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::default_listen_timeout()
    }
}
