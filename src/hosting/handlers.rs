use super::*;
use crate::Error;
use crate::ID;
use crate::gameroom::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

impl Server {
    /// Binds and serves until the process exits.
    pub async fn run(config: Config) -> std::io::Result<()> {
        let state = web::Data::new(Server::new(config.game()));
        log::info!("starting game server at http://{}", config.addr());
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
    }
}

/// Registers every route on an actix app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/accounts", web::post().to(create_account))
        .route("/accounts/verify", web::post().to(verify_account))
        .route("/games", web::post().to(create_game))
        .route("/games", web::get().to(list_games))
        .route("/games/{game_id}/actions", web::post().to(player_action))
        .route("/games/{game_id}/events", web::get().to(game_events));
}

async fn create_account(
    server: web::Data<Server>,
    body: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, Error> {
    let response = server.create_account(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn verify_account(
    server: web::Data<Server>,
    body: web::Json<VerifyAccountRequest>,
) -> Result<HttpResponse, Error> {
    let response = server.verify_account(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn create_game(
    server: web::Data<Server>,
    credential: Credential,
) -> Result<HttpResponse, Error> {
    let response = server.create_game(credential.as_deref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn list_games(
    server: web::Data<Server>,
    credential: Credential,
) -> Result<HttpResponse, Error> {
    let response = server.list_games(credential.as_deref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn player_action(
    server: web::Data<Server>,
    credential: Credential,
    path: web::Path<ID<Game>>,
    body: web::Json<Action>,
) -> Result<HttpResponse, Error> {
    let request = PlayerActionRequest {
        game: path.into_inner(),
        action: body.into_inner(),
    };
    let response = server.player_action(credential.as_deref(), request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Upgrades to a WebSocket and streams replay then live events.
/// The subscription is dropped when the client closes or the socket errors.
async fn game_events(
    server: web::Data<Server>,
    path: web::Path<ID<Game>>,
    body: web::Payload,
    req: HttpRequest,
) -> Result<HttpResponse, actix_web::Error> {
    let game = path.into_inner();
    server.directory().route(game).await?;
    let (response, session, mut stream) = actix_ws::handle(&req, body)?;
    let subscribed = server
        .game_events(game, Box::new(Socket::new(session.clone())))
        .await?;
    let subscription = subscribed.subscription;
    let server = server.into_inner();
    actix_web::rt::spawn(async move {
        use futures::StreamExt;
        let mut session = session;
        'sesh: loop {
            match stream.next().await {
                Some(Ok(actix_ws::Message::Ping(bytes))) => {
                    if session.pong(&bytes).await.is_err() {
                        break 'sesh;
                    }
                }
                Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                Some(Err(_)) => break 'sesh,
                None => break 'sesh,
                _ => continue 'sesh,
            }
        }
        let _ = server.close_events(game, subscription).await;
        let _ = session.close(None).await;
        log::debug!("[events {}] subscriber {} disconnected", game, subscription);
    });
    Ok(response)
}
