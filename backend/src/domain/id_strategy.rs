//! Identifier assignment strategies for newly created users.

use std::fmt;
use std::str::FromStr;

/// How the service derives identifiers for new records.
///
/// `CollectionSize` reproduces the historical behaviour of the API: the new
/// identifier is the current record count plus one. It can hand out an
/// identifier that is still in use once a record other than the newest has
/// been deleted, and concurrent creations may observe the same count.
/// `Monotonic` never reuses a value within the process lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `count + 1`, compatible with existing clients.
    #[default]
    CollectionSize,
    /// Process-wide counter that only moves forward.
    Monotonic,
}

impl IdStrategy {
    /// Configuration spelling of the strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CollectionSize => "collection_size",
            Self::Monotonic => "monotonic",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configured strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown id strategy `{value}`; expected `collection_size` or `monotonic`")]
pub struct IdStrategyParseError {
    value: String,
}

impl FromStr for IdStrategy {
    type Err = IdStrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "collection_size" => Ok(Self::CollectionSize),
            "monotonic" => Ok(Self::Monotonic),
            _ => Err(IdStrategyParseError {
                value: s.to_owned(),
            }),
        }
    }
}
