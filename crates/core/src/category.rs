use serde::{Deserialize, Serialize};

/// Selects which synthetic number feed contributes values on the next
/// refresh.
///
/// Wire codes follow the upstream qualifier convention: `p` for prime,
/// `f` for fibonacci, `e` for even, `r` for random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SequenceCategory {
    Prime,
    Fibonacci,
    #[default]
    Even,
    Random,
}

impl SequenceCategory {
    /// All categories, in dropdown order (even leads — it is the default).
    pub const ALL: [SequenceCategory; 4] = [
        SequenceCategory::Even,
        SequenceCategory::Prime,
        SequenceCategory::Fibonacci,
        SequenceCategory::Random,
    ];

    /// Parse a single-letter qualifier code.
    ///
    /// Unknown codes yield `None`; downstream that means an empty
    /// contribution, never an error.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "p" => Some(Self::Prime),
            "f" => Some(Self::Fibonacci),
            "e" => Some(Self::Even),
            "r" => Some(Self::Random),
            _ => None,
        }
    }

    /// The single-letter qualifier code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Prime => "p",
            Self::Fibonacci => "f",
            Self::Even => "e",
            Self::Random => "r",
        }
    }
}

impl std::fmt::Display for SequenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Prime => "Prime numbers (p)",
            Self::Fibonacci => "Fibonacci numbers (f)",
            Self::Even => "Even numbers (e)",
            Self::Random => "Random numbers (r)",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_codes() {
        assert_eq!(
            SequenceCategory::from_code("f"),
            Some(SequenceCategory::Fibonacci)
        );
        assert_eq!(SequenceCategory::from_code("e"), Some(SequenceCategory::Even));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            SequenceCategory::from_code(" p "),
            Some(SequenceCategory::Prime)
        );
    }

    #[test]
    fn parse_unknown_code() {
        assert_eq!(SequenceCategory::from_code("z"), None);
        assert_eq!(SequenceCategory::from_code(""), None);
    }
}
