//! Button color choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// The closed set of colors a menu button may use.
///
/// The names match the CSS class fragments of the admin theme. When no color
/// is given, buttons fall back to the neutral outline styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonColor {
    /// Neutral outline styling, used when no color is specified.
    #[default]
    OutlineDark,
    Blue,
    Indigo,
    Purple,
    Pink,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Cyan,
    Gray,
    Black,
    White,
}

impl ButtonColor {
    /// Every allowed color, in declaration order.
    pub const ALL: [ButtonColor; 14] = [
        ButtonColor::OutlineDark,
        ButtonColor::Blue,
        ButtonColor::Indigo,
        ButtonColor::Purple,
        ButtonColor::Pink,
        ButtonColor::Red,
        ButtonColor::Orange,
        ButtonColor::Yellow,
        ButtonColor::Green,
        ButtonColor::Teal,
        ButtonColor::Cyan,
        ButtonColor::Gray,
        ButtonColor::Black,
        ButtonColor::White,
    ];

    /// The CSS class fragment for this color.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonColor::OutlineDark => "outline-dark",
            ButtonColor::Blue => "blue",
            ButtonColor::Indigo => "indigo",
            ButtonColor::Purple => "purple",
            ButtonColor::Pink => "pink",
            ButtonColor::Red => "red",
            ButtonColor::Orange => "orange",
            ButtonColor::Yellow => "yellow",
            ButtonColor::Green => "green",
            ButtonColor::Teal => "teal",
            ButtonColor::Cyan => "cyan",
            ButtonColor::Gray => "gray",
            ButtonColor::Black => "black",
            ButtonColor::White => "white",
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonColor {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| NavError::UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::ButtonColor;
    use crate::error::NavError;

    #[test]
    fn default_is_outline_dark() {
        assert_eq!(ButtonColor::default(), ButtonColor::OutlineDark);
        assert_eq!(ButtonColor::default().as_str(), "outline-dark");
    }

    #[test]
    fn parses_every_allowed_name() {
        for color in ButtonColor::ALL {
            assert_eq!(color.as_str().parse::<ButtonColor>(), Ok(color));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "not-a-real-color".parse::<ButtonColor>().unwrap_err();
        assert_eq!(err, NavError::UnknownColor("not-a-real-color".to_string()));
    }

    #[test]
    fn serde_uses_kebab_case_names() {
        let json = serde_json::to_string(&ButtonColor::OutlineDark).unwrap();
        assert_eq!(json, "\"outline-dark\"");
        let color: ButtonColor = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(color, ButtonColor::Green);
        assert!(serde_json::from_str::<ButtonColor>("\"mauve\"").is_err());
    }
}
