// src/chain/mod.rs

pub mod marketplace;
pub mod models;
pub mod rpc;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures coming back from the chain RPC or the marketplace API. These are
/// caught inside the dispatcher and flattened into the uniform failure text;
/// they never escape as protocol errors.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} returned {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed response from {service}: {detail}")]
    Malformed {
        service: &'static str,
        detail: String,
    },
}

/// Truncates an upstream error body so a misbehaving server can't flood the
/// failure text.
fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}
