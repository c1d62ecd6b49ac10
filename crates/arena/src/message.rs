use super::*;
use clash_core::Score;
use serde::Serialize;

/// Running score tally keyed by slot order.
/// Slot 0 is always "player1" for the lifetime of a pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub player1: Score,
    pub player2: Score,
}

/// Messages sent from server to client over WebSocket.
/// Broadcast to every connection unless noted; the wire form is a JSON
/// object tagged by event name.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Sole occupant is waiting for a second player.
    /// Unicast on first join, broadcast on opponent departure.
    WaitingForOpponent { message: String },
    /// Both slots filled; the match begins.
    GameStart { message: String },
    /// Display names and score snapshot once both slots fill.
    PlayerNames {
        player1: String,
        player2: String,
        scores: Scores,
    },
    /// First mover's committed choice, revealed once both have submitted.
    OpponentChoice { choice: Choice },
    /// Round resolved.
    GameOver { result: String, scores: Scores },
    /// A side reached the winning threshold.
    GameWinner { winner: String },
    /// Session reset acknowledged.
    Restart { message: String, scores: Scores },
    /// Join rejected: both slots are occupied.
    ArenaFull { message: String },
}

impl ServerMessage {
    pub fn waiting(message: &str) -> Self {
        Self::WaitingForOpponent {
            message: message.to_string(),
        }
    }
    pub fn start(first: &str, second: &str) -> Self {
        Self::GameStart {
            message: format!("{} vs {}", first, second),
        }
    }
    pub fn names(player1: &str, player2: &str, scores: Scores) -> Self {
        Self::PlayerNames {
            player1: player1.to_string(),
            player2: player2.to_string(),
            scores,
        }
    }
    pub fn opponent(choice: Choice) -> Self {
        Self::OpponentChoice { choice }
    }
    pub fn over(result: String, scores: Scores) -> Self {
        Self::GameOver { result, scores }
    }
    pub fn winner(winner: &str) -> Self {
        Self::GameWinner {
            winner: winner.to_string(),
        }
    }
    pub fn restart(scores: Scores) -> Self {
        Self::Restart {
            message: "New game started! Make your choices.".to_string(),
            scores,
        }
    }
    pub fn full() -> Self {
        Self::ArenaFull {
            message: "The arena is full. Try again later.".to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
