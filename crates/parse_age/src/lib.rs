// crates/parse_age/src/lib.rs

//! Parses human age expressions such as `10m`, `1d` or `2.3w` into a
//! maximum file age in seconds.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `<unsigned decimal><unit>`, anchored on both ends.
static AGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)([smhdwSMHDW])$").unwrap());

/// Seconds per supported unit.
const UNIT_SECONDS: &[(char, f64)] = &[
    ('s', 1.0),
    ('m', 60.0),
    ('h', 3_600.0),
    ('d', 86_400.0),
    ('w', 604_800.0),
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgeError {
    #[error("invalid age format '{0}' (expected e.g. 10m, 1d, 2.3w)")]
    InvalidFormat(String),
    #[error("unknown age unit '{0}'")]
    UnknownUnit(String),
}

/// Converts an age expression into seconds.
///
/// The whole string must match; `" 10m"`, `"10mins"` and `"10"` are all
/// rejected with [`AgeError::InvalidFormat`].
pub fn parse_age(spec: &str) -> Result<f64, AgeError> {
    let caps = AGE_RE
        .captures(spec)
        .ok_or_else(|| AgeError::InvalidFormat(spec.to_string()))?;

    let number: f64 = caps[1]
        .parse()
        .map_err(|_| AgeError::InvalidFormat(spec.to_string()))?;
    let unit = caps[2].to_ascii_lowercase();

    let seconds = unit
        .chars()
        .next()
        .and_then(|u| UNIT_SECONDS.iter().find(|(c, _)| *c == u))
        .map(|(_, secs)| *secs)
        .ok_or_else(|| AgeError::UnknownUnit(unit.clone()))?;

    let age = number * seconds;
    log::debug!("Parsed age '{}' as {} seconds", spec, age);
    Ok(age)
}
