use super::*;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    Malformed(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed event: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Parses client wire text into typed transport events.
/// Centralizes the protocol layer between the socket and the arena:
/// anything that fails here never touches session state.
pub struct Protocol;

impl Protocol {
    /// Parses a client message string into an Event.
    pub fn decode(s: &str) -> Result<Event, ProtocolError> {
        serde_json::from_str(s).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }
}
