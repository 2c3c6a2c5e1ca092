// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use std::sync::Arc;
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;
use clap::Parser;

mod config;
mod gsheets;
mod staff;
mod ui;

use staff::resources::SheetsApi;
use staff::StaffDataPlugin;
use ui::DashboardUiPlugin;

fn main() {
    // A local .env may carry the credential env vars during development.
    dotenvy::dotenv().ok();

    let cli = config::Cli::parse();

    let key = match config::io::load_service_account_key(&cli) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("staffboard: could not load the service account key: {}", e);
            eprintln!(
                "Provide one via --credentials, {}, {} or {}.",
                config::io::INLINE_KEY_ENV,
                config::io::KEY_PATH_ENV,
                config::io::default_credentials_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the platform config directory".to_string()),
            );
            std::process::exit(1);
        }
    };

    let spreadsheet_id = config::resolve_spreadsheet_id(&cli);
    let client = gsheets::SheetsClient::new(key);

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "職員管理システム".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .insert_resource(SheetsApi {
            client: Arc::new(client),
            spreadsheet_id,
        })
        .add_plugins(StaffDataPlugin)
        .add_plugins(DashboardUiPlugin)
        .add_systems(Startup, log_connection_startup)
        .run();
}

fn log_connection_startup(api: Res<SheetsApi>) {
    info!(
        "Reading spreadsheet '{}' as service account '{}'.",
        api.spreadsheet_id,
        api.client.client_email()
    );
}
