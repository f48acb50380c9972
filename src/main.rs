#![allow(dead_code)]
//! Tasks Manager Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod dispatch;
mod error;
mod id;
mod logger;
mod models;
mod persistence;
mod reorder;
mod selection;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    logger::init_logger(config.log_level);
    log::info!("[APP] Starting, snapshot slot {}", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
