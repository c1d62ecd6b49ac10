use clash_core::ID;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

/// Marker for transport-level connection identity.
pub struct Connection;

/// Routes outbound wire text to live connections.
/// Separates connection lifecycle from session logic: every socket is
/// registered here from open to close, seated or not.
#[derive(Debug, Default)]
pub struct Table {
    senders: HashMap<ID<Connection>, UnboundedSender<String>>,
}

impl Table {
    /// Registers a connection's outbound channel.
    pub fn connect(&mut self, conn: ID<Connection>, sender: UnboundedSender<String>) {
        self.senders.insert(conn, sender);
    }
    /// Drops a connection's outbound channel.
    pub fn disconnect(&mut self, conn: ID<Connection>) {
        self.senders.remove(&conn);
    }
    /// Returns the number of live connections.
    pub fn connected_count(&self) -> usize {
        self.senders.len()
    }
    /// Sends wire text to a specific connection.
    pub fn unicast(&self, conn: ID<Connection>, json: String) {
        match self.senders.get(&conn).map(|tx| tx.send(json)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[table] unicast to {} failed: {:?}", conn, e),
            None => log::warn!("[table] unicast to {}: no such connection", conn),
        }
    }
    /// Sends wire text to all connections.
    pub fn broadcast(&self, json: String) {
        self.senders.iter().for_each(|(conn, tx)| {
            if let Err(e) = tx.send(json.clone()) {
                log::warn!("[table] broadcast to {} failed: {:?}", conn, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn table_connect_and_disconnect() {
        let mut table = Table::default();
        let conn = ID::default();
        let (tx, _rx) = unbounded_channel();
        table.connect(conn, tx);
        assert_eq!(table.connected_count(), 1);
        table.disconnect(conn);
        assert_eq!(table.connected_count(), 0);
    }
    #[test]
    fn broadcast_reaches_every_connection() {
        let mut table = Table::default();
        let (tx_a, mut rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        table.connect(ID::default(), tx_a);
        table.connect(ID::default(), tx_b);
        table.broadcast("hello".to_string());
        assert_eq!(rx_a.try_recv().unwrap(), "hello");
        assert_eq!(rx_b.try_recv().unwrap(), "hello");
    }
    #[test]
    fn unicast_reaches_only_the_target() {
        let mut table = Table::default();
        let (tx_a, mut rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        let a = ID::default();
        table.connect(a, tx_a);
        table.connect(ID::default(), tx_b);
        table.unicast(a, "psst".to_string());
        assert_eq!(rx_a.try_recv().unwrap(), "psst");
        assert!(rx_b.try_recv().is_err());
    }
}
