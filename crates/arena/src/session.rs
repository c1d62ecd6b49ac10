use super::*;
use clash_core::ID;
use clash_core::Position;
use clash_core::SEATS;
use clash_core::WIN_THRESHOLD;

const WAITING_FOR_PLAYER: &str = "Waiting for another player to join...";
const OPPONENT_LEFT: &str = "Your opponent has left. Waiting for a new player...";

/// One seated player: transport handle, display name, pending choice.
/// The pending choice is cleared after every resolution and on restart.
#[derive(Debug, Clone)]
pub struct Participant {
    conn: ID<Connection>,
    name: String,
    choice: Option<Choice>,
}

/// Delivery scope for an outbound message.
#[derive(Debug, Clone)]
pub enum Reply {
    Broadcast(ServerMessage),
    Unicast(ID<Connection>, ServerMessage),
}

/// Process-wide match state: two ordered slots and the score tally.
///
/// Slot order is load-bearing — the first joiner is slot 0 ("player1")
/// and keeps that slot for as long as both remain connected. Operations
/// return the messages to deliver; the owning [`Arena`] task serializes
/// every mutation, so none of them interleave.
#[derive(Debug, Default)]
pub struct Session {
    slots: [Option<Participant>; SEATS],
    scores: Scores,
}

impl Session {
    /// Number of occupied slots.
    pub fn occupancy(&self) -> usize {
        self.slots.iter().flatten().count()
    }
    /// Current score tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }
    fn seat(&self, conn: ID<Connection>) -> Option<Position> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|p| p.conn == conn))
    }
    fn vacancy(&self) -> Option<Position> {
        self.slots.iter().position(Option::is_none)
    }
}

impl Session {
    /// Admits a connection under a display name.
    ///
    /// First admission into an empty session zeroes scores and tells the
    /// joiner to wait. Filling the second slot starts the match. A join
    /// from an already-seated connection is a no-op; a join while both
    /// slots are occupied is rejected outright.
    pub fn join(&mut self, conn: ID<Connection>, name: String) -> Vec<Reply> {
        if self.seat(conn).is_some() {
            log::debug!("[session] duplicate join from {}", conn);
            return Vec::new();
        }
        let Some(slot) = self.vacancy() else {
            log::info!("[session] join from {} rejected, arena full", conn);
            return vec![Reply::Unicast(conn, ServerMessage::full())];
        };
        let mut replies = Vec::new();
        if self.occupancy() == 0 {
            self.scores = Scores::default();
            replies.push(Reply::Unicast(conn, ServerMessage::waiting(WAITING_FOR_PLAYER)));
        }
        log::info!("[session] {} seated at slot {} as {}", conn, slot, name);
        self.slots[slot] = Some(Participant {
            conn,
            name,
            choice: None,
        });
        if let Some((a, b)) = self.slots[0].as_ref().zip(self.slots[1].as_ref()) {
            replies.push(Reply::Broadcast(ServerMessage::start(&a.name, &b.name)));
            replies.push(Reply::Broadcast(ServerMessage::names(
                &a.name,
                &b.name,
                self.scores,
            )));
        }
        replies
    }
    /// Records a choice for a seated connection.
    ///
    /// Resubmitting before the opponent commits overwrites. Once both
    /// slots hold a choice, the first mover's choice is revealed to all
    /// connections and the round resolves. Choices from connections
    /// without a slot are ignored.
    pub fn choose(&mut self, conn: ID<Connection>, choice: Choice) -> Vec<Reply> {
        let Some(slot) = self.seat(conn) else {
            log::debug!("[session] choice from unseated connection {}", conn);
            return Vec::new();
        };
        if let Some(seated) = self.slots[slot].as_mut() {
            seated.choice = Some(choice);
        }
        let mut replies = Vec::new();
        if let Some(held) = self.slots[slot ^ 1].as_ref().and_then(|p| p.choice) {
            replies.push(Reply::Broadcast(ServerMessage::opponent(held)));
            replies.extend(self.resolve_round());
        }
        replies
    }
    /// Clears every pending choice and zeroes scores.
    /// Callable by any connected socket; there is no ownership check.
    pub fn restart(&mut self) -> Vec<Reply> {
        for seated in self.slots.iter_mut().flatten() {
            seated.choice = None;
        }
        self.scores = Scores::default();
        log::info!("[session] restart");
        vec![Reply::Broadcast(ServerMessage::restart(self.scores))]
    }
    /// Removes a connection's participant, if seated.
    ///
    /// The survivor is renumbered to slot 0, so it plays as "player1"
    /// against the next joiner. Dropping below two participants zeroes
    /// scores and announces the wait for a new opponent.
    pub fn leave(&mut self, conn: ID<Connection>) -> Vec<Reply> {
        let Some(slot) = self.seat(conn) else {
            return Vec::new();
        };
        log::info!("[session] {} left slot {}", conn, slot);
        self.slots[slot] = None;
        if slot == 0 && self.slots[1].is_some() {
            self.slots[0] = self.slots[1].take();
        }
        if self.occupancy() < SEATS {
            self.scores = Scores::default();
            return vec![Reply::Broadcast(ServerMessage::waiting(OPPONENT_LEFT))];
        }
        Vec::new()
    }
}

impl Session {
    /// Applies the verdict for two committed choices: scores, round
    /// result, unconditional threshold check, then choice clearing.
    fn resolve_round(&mut self) -> Vec<Reply> {
        let Some((a, b)) = self.slots[0].as_ref().zip(self.slots[1].as_ref()) else {
            return Vec::new();
        };
        let Some((x, y)) = a.choice.zip(b.choice) else {
            return Vec::new();
        };
        let (first, second) = (a.name.clone(), b.name.clone());
        let verdict = resolve(x, y);
        match verdict {
            Verdict::First => self.scores.player1 += 1,
            Verdict::Second => self.scores.player2 += 1,
            Verdict::Draw => {}
        }
        let result = verdict.message(&first, &second);
        log::info!("[session] {} vs {}: {}", x, y, result);
        let mut replies = vec![Reply::Broadcast(ServerMessage::over(result, self.scores))];
        if self.scores.player1 >= WIN_THRESHOLD {
            replies.push(Reply::Broadcast(ServerMessage::winner(&first)));
        } else if self.scores.player2 >= WIN_THRESHOLD {
            replies.push(Reply::Broadcast(ServerMessage::winner(&second)));
        }
        for seated in self.slots.iter_mut().flatten() {
            seated.choice = None;
        }
        replies
    }
}
