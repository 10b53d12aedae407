//! The single confirmed complex number.

use complexkit_core::Complex;
use serde::{Deserialize, Serialize};

/// Session state: nothing confirmed yet, or one confirmed number.
///
/// A new confirmation replaces the previous value; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Unset,
    Set(Complex),
}

impl SessionState {
    pub fn current(&self) -> Option<Complex> {
        match self {
            SessionState::Unset => None,
            SessionState::Set(z) => Some(*z),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, SessionState::Set(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert_eq!(SessionState::default(), SessionState::Unset);
        assert_eq!(SessionState::Unset.current(), None);
    }

    #[test]
    fn test_set_exposes_value() {
        let state = SessionState::Set(Complex::new(1.0, 2.0));
        assert!(state.is_set());
        assert_eq!(state.current(), Some(Complex::new(1.0, 2.0)));
    }
}
