//! Match Server Binary
//!
//! Pairs two WebSocket clients into a rock-paper-scissors match.
//! Runs on BIND_ADDR (e.g. 0.0.0.0:8000).

#[tokio::main]
async fn main() {
    clash_core::log();
    clash_core::kys();
    clash_server::run().await.unwrap();
}
