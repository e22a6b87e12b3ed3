mod assets;
mod config;

use std::thread;
use std::time::Duration;

use actix_web::{App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let url = config.url();

    if assets::STATIC_DIR.get_file("index.html").is_none() {
        warn!("No front-end build embedded; run `trunk build` in frontend/ and rebuild");
    }

    if config.open_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&browser_url) {
                warn!("Could not open a browser: {}", err);
            }
        });
    }

    info!("Admin running at {}", url);

    HttpServer::new(|| App::new().configure(assets::configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
