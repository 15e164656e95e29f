use std::fmt;

/// Codes for every condition the compiler reports without aborting.
///
/// Format: `E####` for locale-level exclusions, `W####` for field-level
/// skips. The first digit after the letter groups codes by stage:
/// - x1xxx: locale identity and directory lookups
/// - x2xxx: field resolution
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Locale-level exclusions (E1xxx)
    /// Composed locale name has no numeric-id mapping
    E1001,

    // Field-level skips (W2xxx)
    /// Unknown optional-calendar token
    W2001,
    /// Territory has no currency mapping
    W2002,
    /// Locale name does not match any region
    W2003,
    /// List has the wrong number of items or exceeds its capacity
    W2004,
    /// Source needed to resolve a display name is missing
    W2005,
    /// Numeric attribute could not be parsed
    W2006,
}

impl ErrorCode {
    /// All code variants, in declaration order.
    ///
    /// Kept in sync with `as_str()`; `test_all_codes_round_trip` catches
    /// any omission.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::W2001,
        ErrorCode::W2002,
        ErrorCode::W2003,
        ErrorCode::W2004,
        ErrorCode::W2005,
        ErrorCode::W2006,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::W2001 => "W2001",
            ErrorCode::W2002 => "W2002",
            ErrorCode::W2003 => "W2003",
            ErrorCode::W2004 => "W2004",
            ErrorCode::W2005 => "W2005",
            ErrorCode::W2006 => "W2006",
        }
    }

    /// One-line summary shown by `locc explain` above the long form.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "locale has no numeric identifier and was excluded",
            ErrorCode::W2001 => "unknown optional calendar token",
            ErrorCode::W2002 => "territory has no currency mapping",
            ErrorCode::W2003 => "locale name does not match any region",
            ErrorCode::W2004 => "list has the wrong number of items",
            ErrorCode::W2005 => "display name source is missing",
            ErrorCode::W2006 => "numeric attribute could not be parsed",
        }
    }

    /// Excludes a whole locale from the output.
    pub fn is_exclusion(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E1001"` or `"w2003"`.
///
/// Case-insensitive; derived from [`ErrorCode::ALL`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
