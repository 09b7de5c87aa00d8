use std::fmt;
use std::str::FromStr;

///
/// Duration
///
/// Stored as milliseconds. The canonical wire text is `"hh:mm:ss[.fraction]"`
/// (the spec's `TimeSpan` tag), matched byte-for-byte regardless of locale.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);

    const MS_PER_SEC: i64 = 1_000;
    const SECS_PER_MIN: i64 = 60;
    const MINS_PER_HOUR: i64 = 60;

    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

/// Error returned when a `"hh:mm:ss[.fraction]"` literal cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseDurationError(pub String);

impl fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid duration literal: {}", self.0)
    }
}

impl std::error::Error for ParseDurationError {}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.0 < 0;
        let total_ms = self.0.unsigned_abs();
        let ms = total_ms % 1000;
        let total_secs = total_ms / 1000;
        let secs = total_secs % 60;
        let total_mins = total_secs / 60;
        let mins = total_mins % 60;
        let hours = total_mins / 60;

        if negative {
            write!(f, "-")?;
        }
        write!(f, "{hours:02}:{mins:02}:{secs:02}")?;
        if ms != 0 {
            write!(f, ".{ms:03}")?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDurationError(s.to_string());

        let (negative, rest) = s.strip_prefix('-').map_or((false, s), |r| (true, r));
        let (hms, fraction) = match rest.split_once('.') {
            Some((hms, frac)) => (hms, Some(frac)),
            None => (rest, None),
        };

        let mut parts = hms.split(':');
        let hours: i64 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let mins: i64 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let secs: i64 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }

        let ms: i64 = match fraction {
            Some(frac) => {
                let padded = format!("{frac:0<3}");
                padded
                    .get(..3)
                    .ok_or_else(err)?
                    .parse()
                    .map_err(|_| err())?
            }
            None => 0,
        };

        let total = ((hours * Self::MINS_PER_HOUR + mins) * Self::SECS_PER_MIN + secs)
            * Self::MS_PER_SEC
            + ms;

        Ok(Self(if negative { -total } else { total }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_with_fraction() {
        let d = Duration::from_millis(((2 * 60 + 3) * 60 + 4) * 1000 + 500);
        assert_eq!(d.to_string(), "02:03:04.500");
        assert_eq!(d.to_string().parse::<Duration>().unwrap(), d);
    }

    #[test]
    fn round_trips_without_fraction() {
        let d = Duration::from_millis(3600 * 1000);
        assert_eq!(d.to_string(), "01:00:00");
        assert_eq!("01:00:00".parse::<Duration>().unwrap(), d);
    }

    #[test]
    fn rejects_malformed_literal() {
        assert!("not-a-duration".parse::<Duration>().is_err());
    }
}
