//! Identifiers for the downstream workers.

use std::fmt;

/// The two workers the orchestrator can delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerKind {
    /// Worker A: reverse then uppercase.
    Bravo,
    /// Worker B: vowel masking.
    Charlie,
}

impl WorkerKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bravo => "bravo",
            Self::Charlie => "charlie",
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
