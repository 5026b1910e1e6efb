//! Change detection.
//!
//! A [`Fingerprint`] is the byte length of the last payload written to an
//! artifact. Two payloads of equal length compare as unchanged even when
//! their content differs.

use serde::{Deserialize, Serialize};

/// Byte-length fingerprint of the last written payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Fingerprint of an artifact that was never written.
    pub const EMPTY: Self = Self(0);

    /// Creates a fingerprint from a known byte length.
    pub fn from_len(len: u64) -> Self {
        Self(len)
    }

    /// Computes the fingerprint of a payload.
    pub fn of(payload: &[u8]) -> Self {
        Self(payload.len() as u64)
    }

    /// Returns the byte length this fingerprint stands for.
    pub fn len(self) -> u64 {
        self.0
    }

    /// Returns true for the fingerprint of a never-written artifact.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Returns true if `new_payload` differs from the last written payload.
pub fn changed(new_payload: &[u8], last: Fingerprint) -> bool {
    Fingerprint::of(new_payload) != last
}
