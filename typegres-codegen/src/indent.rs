//! Indentation configuration for generated output.

use std::str::FromStr;

/// Indentation unit applied once per depth level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2, 4, or 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// String for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(8) => "        ",
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

impl FromStr for Indent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" => Ok(Self::Tab),
            "2" => Ok(Self::Spaces(2)),
            "4" => Ok(Self::Spaces(4)),
            "8" => Ok(Self::Spaces(8)),
            _ => Err(format!("invalid indent '{}', expected 2, 4, 8, or 'tab'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Indent::from_str("2").unwrap(), Indent::Spaces(2));
        assert_eq!(Indent::from_str("tab").unwrap(), Indent::Tab);
        assert!(Indent::from_str("three").is_err());
        assert!(Indent::from_str("3").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
