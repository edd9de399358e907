//! Response builder for the crossword corpus endpoint
//!
//! Unlike [`WordClueStore::load`], this path reports corpus failures: the
//! endpoint answers 500 with the error details instead of serving fallback data.

use log::{error, info};
use serde_json::{Value, json};

use crate::corpus::store::WordClueStore;
use crate::io::error::Result;

/// Status code for a successful response
pub const STATUS_OK: u16 = 200;
/// Status code for a failed response
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Status and JSON body of an endpoint response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON response body
    pub body: Value,
}

impl ApiResponse {
    /// Whether the status is a success
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    fn failure(details: &impl ToString) -> Self {
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: json!({
                "error": "Failed to fetch crossword data",
                "details": details.to_string(),
            }),
        }
    }
}

/// Freshly read corpus as the JSON document served by the endpoint
///
/// # Errors
///
/// Returns an error if the corpus files cannot be read, parsed or validated,
/// or if serialization fails
pub fn corpus_body(store: &WordClueStore) -> Result<Value> {
    let corpus = store.read_corpus()?;
    Ok(serde_json::to_value(&corpus)?)
}

/// Handle `GET /api/crosswords`: the full corpus, or a 500 with details
pub fn crosswords_response(store: &WordClueStore) -> ApiResponse {
    info!("Fetching crossword data");

    match corpus_body(store) {
        Ok(body) => ApiResponse {
            status: STATUS_OK,
            body,
        },
        Err(err) => {
            error!("Error in crosswords API: {err}");
            ApiResponse::failure(&err)
        }
    }
}
