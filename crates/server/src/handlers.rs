use clash_arena::ArenaHandle;
use clash_arena::Connection;
use clash_core::ID;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use tokio::sync::mpsc::unbounded_channel;

/// Upgrades the request to a WebSocket and bridges it into the arena.
pub async fn play(
    arena: web::Data<ArenaHandle>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match bridge(&arena, session, stream) {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::ServiceUnavailable()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}

/// Spawns the per-connection pump between socket and arena.
/// Outbound JSON drains from the connection's channel into the socket;
/// inbound text frames become arena commands; close or error hangs up.
fn bridge(
    arena: &ArenaHandle,
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
) -> anyhow::Result<()> {
    use futures::StreamExt;
    let conn: ID<Connection> = ID::default();
    let (tx, mut rx) = unbounded_channel::<String>();
    arena
        .connect(conn, tx)
        .then_some(())
        .ok_or_else(|| anyhow::anyhow!("arena unavailable"))?;
    log::debug!("[bridge {}] connected", conn);
    let arena = arena.clone();
    actix_web::rt::spawn(async move {
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if session.text(json).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => if !arena.inbound(conn, text.to_string()) { break 'sesh },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        arena.hangup(conn);
        log::debug!("[bridge {}] disconnected", conn);
    });
    Ok(())
}
