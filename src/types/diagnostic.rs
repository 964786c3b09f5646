use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Note,
}

impl Severity {
    /// Accepts only the exact lowercase tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "note" => Some(Self::Note),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic line.
///
/// `line` and `column` are 0-based; the input carries them 1-based, so a
/// `0` in the input is stored as `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub file: String,
    pub line: i64,
    pub column: i64,
    pub severity: Severity,
    pub message: String,
    pub rule: String,
}
