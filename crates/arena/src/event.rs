use super::*;
use serde::Deserialize;

/// Events delivered by the transport on behalf of a connection.
/// Disconnects are implicit: the bridge hangs up instead of sending one.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Join the arena under a display name.
    SetName { name: String },
    /// Submit a round choice.
    MakeChoice { choice: Choice },
    /// Reset scores and pending choices.
    RestartGame,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::SetName { name } => write!(f, "join as {}", name),
            Event::MakeChoice { choice } => write!(f, "choice: {}", choice),
            Event::RestartGame => write!(f, "restart"),
        }
    }
}
