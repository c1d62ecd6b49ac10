use super::*;

/// Outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Slot 0 takes the round.
    First,
    /// Slot 1 takes the round.
    Second,
    /// Equal choices; nobody scores.
    Draw,
}

/// Resolves two simultaneous choices into a round verdict.
/// Stateless and deterministic. Precedence: first-slot win under the
/// standard cycle, then second-slot win, then draw.
pub fn resolve(a: Choice, b: Choice) -> Verdict {
    if a.beats(b) {
        Verdict::First
    } else if b.beats(a) {
        Verdict::Second
    } else {
        Verdict::Draw
    }
}

impl Verdict {
    /// Renders the round result line broadcast to all connections.
    pub fn message(&self, first: &str, second: &str) -> String {
        match self {
            Self::First => format!("{} wins! 🥳", first),
            Self::Second => format!("{} wins! 🥳", second),
            Self::Draw => "It's a draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const CHOICES: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];
    #[test]
    fn symmetric_under_slot_swap() {
        for a in CHOICES {
            for b in CHOICES {
                match resolve(a, b) {
                    Verdict::First => assert_eq!(resolve(b, a), Verdict::Second),
                    Verdict::Second => assert_eq!(resolve(b, a), Verdict::First),
                    Verdict::Draw => assert_eq!(resolve(b, a), Verdict::Draw),
                }
            }
        }
    }
    #[test]
    fn equal_choices_always_draw() {
        for c in CHOICES {
            assert_eq!(resolve(c, c), Verdict::Draw);
        }
    }
    #[test]
    fn standard_cycle() {
        assert_eq!(resolve(Choice::Rock, Choice::Scissors), Verdict::First);
        assert_eq!(resolve(Choice::Paper, Choice::Rock), Verdict::First);
        assert_eq!(resolve(Choice::Scissors, Choice::Rock), Verdict::Second);
    }
    #[test]
    fn message_names_the_winner() {
        assert_eq!(
            Verdict::First.message("Alice", "Bob"),
            "Alice wins! 🥳"
        );
        assert_eq!(
            Verdict::Second.message("Alice", "Bob"),
            "Bob wins! 🥳"
        );
        assert_eq!(Verdict::Draw.message("Alice", "Bob"), "It's a draw!");
    }
}
