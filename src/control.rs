use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A navigation request coming from a display surface (a button press, a typed
/// command, an episode link).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
    First,
    Last,
    Jump(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized control {0:?}")]
pub struct InvalidControl(pub String);

impl FromStr for Control {
    type Err = InvalidControl;

    // Accepts "prev", "next", "first", "last", "jump <k>" or a bare index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidControl(s.to_string());
        let mut words = s.split_whitespace();
        let control = match words.next().ok_or_else(invalid)? {
            "prev" | "previous" | "p" => Control::Previous,
            "next" | "n" => Control::Next,
            "first" => Control::First,
            "last" => Control::Last,
            "jump" | "j" => {
                let index = words.next().ok_or_else(invalid)?;
                Control::Jump(index.parse().map_err(|_| invalid())?)
            }
            other => Control::Jump(other.parse().map_err(|_| invalid())?),
        };
        if words.next().is_some() {
            return Err(invalid());
        }
        Ok(control)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Previous => write!(f, "prev"),
            Control::Next => write!(f, "next"),
            Control::First => write!(f, "first"),
            Control::Last => write!(f, "last"),
            Control::Jump(index) => write!(f, "jump {}", index),
        }
    }
}
