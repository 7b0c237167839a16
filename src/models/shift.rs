use serde::Serialize;
use std::fmt;

/// Work shift label.
///
/// A covers 07:00–15:30, B covers 15:30–24:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shift {
    A,
    B,
}

impl Shift {
    pub fn code(&self) -> &'static str {
        match self {
            Shift::A => "A",
            Shift::B => "B",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Shift::A),
            "B" => Some(Shift::B),
            _ => None,
        }
    }

    /// Parse a caller-supplied code. Only the exact labels are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        Shift::from_db_str(code)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
