//! application entry point

use crate::server::model::config::ServerConfig;
use log::info;
use std::env;
use std::net::SocketAddrV4;
use std::path::Path;
use std::str::FromStr;
use derive_more::Display;

mod server;

const DOTENV_LOADING_FAILED_MSG: &str = "failed to load envs from dotenv files, aborting";
const HOST_PARSING_FAILED_MSG: &str = "failed to parse HOST, aborting";
const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_PRICING_ENDPOINT: &str = "http://127.0.0.1:8090";

#[actix_web::main()]
async fn main() -> std::io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // envs come from the deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev"))
            .expect(DOTENV_LOADING_FAILED_MSG),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let config = ServerConfig::new(
        SocketAddrV4::from_str(
            env::var("HOST")
                .unwrap_or(DEFAULT_HOST_ADDR.to_string())
                .as_str(),
        )
        .expect(HOST_PARSING_FAILED_MSG),
        env::var("PRICING_ENDPOINT").unwrap_or(DEFAULT_PRICING_ENDPOINT.to_string()),
    );

    info!("App is starting in env={}, pricing source={}", env, config.pricing_endpoint);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
