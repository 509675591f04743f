//! main file for the server

mod billing;
mod controller;
mod menu;
pub mod model;
mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use crate::server::menu::backoff::Backoff;
use crate::server::menu::client::{MenuCell, MenuClient};
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;

/// Run the server
pub async fn run(ServerConfig { addr, pricing_endpoint }: ServerConfig) -> std::io::Result<()> {
    let menu = MenuCell::default();
    let menu_client = MenuClient::new(&pricing_endpoint, menu.clone()).map_err(std::io::Error::other)?;
    let data = web::Data::new(AppState::new(menu));

    // the menu loads in the background, bills answer 503 until it is there
    let cancel_token = CancellationToken::new();
    let tracker = TaskTracker::new();
    let loader_token = cancel_token.clone();
    tracker.spawn(async move {
        menu_client.load(Backoff::default(), &loader_token).await;
    });
    tracker.close();

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(controller::configure)
    })
        .bind(addr)?
        .run()
        .await;

    info!("server stopped, cancelling menu loader");
    cancel_token.cancel();
    tracker.wait().await;
    result
}
