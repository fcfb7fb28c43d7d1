use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /play`. The bet travels exactly as typed into the form
/// field; the server is the one that interprets it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpinRequest {
    pub bet_size: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResponse {
    pub all_symbols: Vec<String>,
    pub symbols_array: Vec<String>, // one symbol name per reel
    pub balance: i64,
    pub payout: i64,
}

impl SpinResponse {
    /// The client refuses to render a response whose line length does not
    /// match its reel count; a partial reel update is worse than an error.
    pub fn check_reel_count(&self, expected: usize) -> Result<(), ResponseError> {
        if self.symbols_array.len() != expected {
            return Err(ResponseError::ReelCountMismatch {
                expected,
                actual: self.symbols_array.len(),
            });
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResponseError {
    #[error("server sent {actual} symbols for {expected} reels")]
    ReelCountMismatch { expected: usize, actual: usize },
}

/// One audit row per spin, as stored by the server and read by the CLI.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpinLogEntry {
    pub id: i64,
    pub ts: DateTime<Utc>,
    pub bet_size: i64,
    pub symbols: Vec<String>,
    pub payout: i64,
    pub balance_after: i64,
}
