// src/gsheets/mod.rs

// Read-only Google Sheets access: service-account token flow plus the two
// REST calls the dashboard needs (first worksheet title, worksheet values).
// Everything network-related lives in this module; the rest of the app only
// sees `SheetsClient` and `SheetsError`.

pub mod auth;
pub mod client;

pub use client::SheetsClient;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("system clock is before the unix epoch")]
    Clock,

    #[error("service account key was rejected: {0}")]
    Key(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange failed ({status}): {body}")]
    TokenExchange {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Sheets API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("spreadsheet has no worksheets")]
    NoWorksheets,

    #[error("could not build the request URL")]
    InvalidUrl,
}
