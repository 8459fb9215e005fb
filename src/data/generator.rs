use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DataError;
use super::model::Token;

/// Sizes the generator offers in the UI.
pub const GENERATION_SIZES: [usize; 3] = [100, 1000, 100_000];

/// Numbers are drawn from `[0, UPPER_BOUND)`.
const UPPER_BOUND: u32 = 10_000;

// ---------------------------------------------------------------------------
// DataKind – what the generator produces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataKind {
    #[default]
    Integer,
    Double,
    String,
}

impl DataKind {
    pub const ALL: [DataKind; 3] = [DataKind::Integer, DataKind::Double, DataKind::String];

    pub fn name(self) -> &'static str {
        match self {
            DataKind::Integer => "Integer",
            DataKind::Double => "Double",
            DataKind::String => "String",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| DataError::UnsupportedKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate `count` random tokens of `kind` using the thread-local RNG.
pub fn generate(kind: DataKind, count: usize) -> Vec<Token> {
    generate_with(&mut rand::thread_rng(), kind, count)
}

/// Generate `count` random tokens of `kind` from the given RNG.
///
/// * `Integer` – uniform in `[0, 10000)`
/// * `Double`  – uniform in `[0, 10000)`, always two decimals
/// * `String`  – first 8 hex digits of a random v4 UUID
pub fn generate_with<R: Rng>(rng: &mut R, kind: DataKind, count: usize) -> Vec<Token> {
    (0..count)
        .map(|_| match kind {
            DataKind::Integer => rng.gen_range(0..UPPER_BOUND).to_string(),
            DataKind::Double => {
                let v: f64 = rng.gen_range(0.0..f64::from(UPPER_BOUND));
                // 9999.996 would round up to the excluded bound.
                format!("{:.2}", v.min(9999.99))
            }
            DataKind::String => {
                let uuid = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
                short_id(uuid)
            }
        })
        .collect()
}

/// First group of the canonical hyphenated form.
fn short_id(uuid: Uuid) -> String {
    let mut buf = Uuid::encode_buffer();
    let hyphenated = uuid.hyphenated().encode_lower(&mut buf);
    hyphenated[..8].to_string()
}
