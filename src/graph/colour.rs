use std::fmt;
use std::str::FromStr;

use crate::error::ArgumentError;

/// Drawing colour attached to vertices and edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Colour {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl Colour {
    /// Every supported colour, in palette order.
    pub const ALL: [Colour; 7] = [
        Colour::Black,
        Colour::Red,
        Colour::Green,
        Colour::Blue,
        Colour::Yellow,
        Colour::Orange,
        Colour::Purple,
    ];

    /// Lower-case colour name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Colour::Black => "black",
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Yellow => "yellow",
            Colour::Orange => "orange",
            Colour::Purple => "purple",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colour {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Colour::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ArgumentError::InvalidColour(s.to_owned()))
    }
}
