// aquaguard-core/src/domain/verdict.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final per-record outcome. Derived fresh on every evaluation — never
/// cached, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    NotSafe,
}

impl Verdict {
    /// The literal string written into the `Prediction` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::NotSafe => "Not Safe",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
