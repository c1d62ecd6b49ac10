use serde::Deserialize;
use serde::Serialize;

/// A round choice.
///
/// Standard cycle applies: rock beats scissors, scissors beats paper,
/// paper beats rock. Wire form is the lowercase name.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// Rock — beats Scissors, loses to Paper.
    Rock,
    /// Paper — beats Rock, loses to Scissors.
    Paper,
    /// Scissors — beats Paper, loses to Rock.
    Scissors,
}

impl Choice {
    /// Whether this choice defeats the other under the standard cycle.
    pub fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Scissors, Self::Paper)
                | (Self::Paper, Self::Rock)
        )
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn cycle_beats() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
    }
    #[test]
    fn cycle_loses() {
        assert!(!Choice::Scissors.beats(Choice::Rock));
        assert!(!Choice::Paper.beats(Choice::Scissors));
        assert!(!Choice::Rock.beats(Choice::Paper));
    }
    #[test]
    fn nothing_beats_itself() {
        for c in [Choice::Rock, Choice::Paper, Choice::Scissors] {
            assert!(!c.beats(c));
        }
    }
    #[test]
    fn wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Choice::Rock).unwrap(), "\"rock\"");
        let parsed: Choice = serde_json::from_str("\"scissors\"").unwrap();
        assert_eq!(parsed, Choice::Scissors);
    }
}
