use std::str::FromStr;

use cubeturn_core::Face;

/// Discrete request from an input handler.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Turn a face clockwise.
    Turn(Face),
    /// Mix up the cube.
    Scramble,
    /// Return the cube to the solved state.
    Reset,
}
impl Action {
    /// Returns the action bound to a key, if any.
    ///
    /// - `1`..`6` turn the front, back, right, left, top, and bottom faces
    /// - space scrambles
    /// - `r` or `R` resets
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            ' ' => Some(Action::Scramble),
            'r' | 'R' => Some(Action::Reset),
            _ => Face::from_key(key).map(Action::Turn),
        }
    }

    /// Parses a sequence of key presses, ignoring newlines.
    pub fn parse_keys(keys: &str) -> Result<Vec<Self>, ParseActionError> {
        keys.chars()
            .filter(|&c| c != '\n' && c != '\r')
            .map(|c| Self::from_key(c).ok_or(ParseActionError::UnboundKey(c)))
            .collect()
    }
}
impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses a single action from a key (`3`, `r`), a face (`right`, `F`),
    /// or a command name (`scramble`, `reset`).
    ///
    /// A single character that is bound to a key always means what that key
    /// does, so `R` resets rather than turning the right face.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let single_char = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        if let Some(action) = single_char.and_then(Self::from_key) {
            return Ok(action);
        }
        match s {
            "scramble" => return Ok(Action::Scramble),
            "reset" => return Ok(Action::Reset),
            _ => (),
        }
        match (s.parse(), single_char) {
            (Ok(face), _) => Ok(Action::Turn(face)),
            (Err(_), Some(c)) => Err(ParseActionError::UnboundKey(c)),
            (Err(_), None) => Err(ParseActionError::Unknown(s.to_owned())),
        }
    }
}

/// Error returned when input does not correspond to any [`Action`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ParseActionError {
    #[error("key {0:?} is not bound to any action")]
    UnboundKey(char),
    #[error("unknown action {0:?}")]
    Unknown(String),
}
