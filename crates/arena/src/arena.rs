use super::*;
use clash_core::ID;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Commands delivered to the arena task by transport bridges.
#[derive(Debug)]
pub enum Command {
    /// A socket opened; register its outbound channel.
    Connect(ID<Connection>, UnboundedSender<String>),
    /// Raw wire text arrived from a connection.
    Inbound(ID<Connection>, String),
    /// A socket closed.
    Hangup(ID<Connection>),
}

/// Single-writer coordinator for the process-wide session.
///
/// Owns [`Session`] and [`Table`] and drains one command queue, so
/// joins, choices, restarts, and departures observe and update
/// consistent state without locks.
pub struct Arena {
    session: Session,
    table: Table,
    rejected: u64,
    rx: UnboundedReceiver<Command>,
}

/// Cloneable handle for submitting commands to the arena task.
#[derive(Clone)]
pub struct ArenaHandle {
    tx: UnboundedSender<Command>,
}

impl Arena {
    /// Spawns the arena task and returns its handle.
    pub fn spawn() -> ArenaHandle {
        let (tx, rx) = unbounded_channel();
        let arena = Self {
            session: Session::default(),
            table: Table::default(),
            rejected: 0,
            rx,
        };
        tokio::spawn(arena.run());
        ArenaHandle { tx }
    }
    async fn run(mut self) {
        while let Some(command) = self.rx.recv().await {
            self.handle(command);
        }
        log::info!("[arena] all handles dropped, shutting down");
    }
    fn handle(&mut self, command: Command) {
        match command {
            Command::Connect(conn, sender) => {
                log::info!("[arena] player connected: {}", conn);
                self.table.connect(conn, sender);
            }
            Command::Inbound(conn, text) => match Protocol::decode(&text) {
                Ok(event) => self.apply(conn, event),
                Err(e) => {
                    self.rejected += 1;
                    log::warn!(
                        "[arena] rejected input from {}: {} ({} rejected so far)",
                        conn,
                        e,
                        self.rejected
                    );
                }
            },
            Command::Hangup(conn) => {
                log::info!("[arena] player disconnected: {}", conn);
                self.table.disconnect(conn);
                let replies = self.session.leave(conn);
                self.deliver(replies);
            }
        }
    }
    fn apply(&mut self, conn: ID<Connection>, event: Event) {
        log::debug!("[arena] {}: {}", conn, event);
        let replies = match event {
            Event::SetName { name } => self.session.join(conn, name),
            Event::MakeChoice { choice } => self.session.choose(conn, choice),
            Event::RestartGame => self.session.restart(),
        };
        self.deliver(replies);
    }
    fn deliver(&self, replies: Vec<Reply>) {
        for reply in replies {
            match reply {
                Reply::Broadcast(message) => self.table.broadcast(message.to_json()),
                Reply::Unicast(conn, message) => self.table.unicast(conn, message.to_json()),
            }
        }
    }
}

impl ArenaHandle {
    /// Registers a freshly opened connection. Returns false if the
    /// arena task is gone.
    pub fn connect(&self, conn: ID<Connection>, sender: UnboundedSender<String>) -> bool {
        self.send(Command::Connect(conn, sender))
    }
    /// Forwards raw wire text from a connection.
    pub fn inbound(&self, conn: ID<Connection>, text: String) -> bool {
        self.send(Command::Inbound(conn, text))
    }
    /// Reports a closed connection.
    pub fn hangup(&self, conn: ID<Connection>) -> bool {
        self.send(Command::Hangup(conn))
    }
    fn send(&self, command: Command) -> bool {
        self.tx
            .send(command)
            .inspect_err(|e| log::error!("[arena] command dropped: {}", e))
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn enter(
        arena: &ArenaHandle,
        name: &str,
    ) -> (ID<Connection>, UnboundedReceiver<String>) {
        let conn = ID::default();
        let (tx, rx) = unbounded_channel();
        assert!(arena.connect(conn, tx));
        assert!(arena.inbound(
            conn,
            format!(r#"{{"type":"set_name","name":"{}"}}"#, name)
        ));
        (conn, rx)
    }
    async fn next_of(rx: &mut UnboundedReceiver<String>, event: &str) -> String {
        loop {
            let json = rx.recv().await.expect("arena closed the channel");
            if json.contains(&format!(r#""type":"{}""#, event)) {
                return json;
            }
        }
    }

    #[tokio::test]
    async fn pairing_broadcasts_game_start() {
        let arena = Arena::spawn();
        let (_, mut rx_a) = enter(&arena, "Alice");
        let (_, _rx_b) = enter(&arena, "Bob");
        let start = next_of(&mut rx_a, "game_start").await;
        assert!(start.contains("Alice vs Bob"));
        let names = next_of(&mut rx_a, "player_names").await;
        assert!(names.contains(r#""player1":"Alice""#));
    }
    #[tokio::test]
    async fn round_trip_through_the_wire() {
        let arena = Arena::spawn();
        let (alice, mut rx_a) = enter(&arena, "Alice");
        let (bob, _rx_b) = enter(&arena, "Bob");
        arena.inbound(alice, r#"{"type":"make_choice","choice":"rock"}"#.to_string());
        arena.inbound(bob, r#"{"type":"make_choice","choice":"scissors"}"#.to_string());
        let reveal = next_of(&mut rx_a, "opponent_choice").await;
        assert!(reveal.contains(r#""choice":"rock""#));
        let over = next_of(&mut rx_a, "game_over").await;
        assert!(over.contains("Alice wins!"));
        assert!(over.contains(r#""player1":1"#));
    }
    #[tokio::test]
    async fn malformed_input_never_reaches_the_session() {
        let arena = Arena::spawn();
        let (alice, mut rx_a) = enter(&arena, "Alice");
        let (bob, _rx_b) = enter(&arena, "Bob");
        arena.inbound(alice, r#"{"type":"make_choice","choice":"lizard"}"#.to_string());
        arena.inbound(alice, "not json at all".to_string());
        arena.inbound(alice, r#"{"type":"make_choice","choice":"rock"}"#.to_string());
        arena.inbound(bob, r#"{"type":"make_choice","choice":"paper"}"#.to_string());
        let over = next_of(&mut rx_a, "game_over").await;
        assert!(over.contains("Bob wins!"));
    }
    #[tokio::test]
    async fn hangup_announces_the_wait() {
        let arena = Arena::spawn();
        let (alice, _rx_a) = enter(&arena, "Alice");
        let (_, mut rx_b) = enter(&arena, "Bob");
        arena.hangup(alice);
        let waiting = next_of(&mut rx_b, "waiting_for_opponent").await;
        assert!(waiting.contains("opponent has left"));
    }
}
