//! Test fixtures: attachment files on disk and a deterministic fetcher

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use polyllm::{FetchError, Fetcher};
use tempfile::NamedTempFile;

/// Write `bytes` to a temp file with the given suffix (e.g. ".png")
pub fn temp_attachment(suffix: &str, bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp attachment");
    file.write_all(bytes).expect("write temp attachment");
    file
}

/// Path of a temp file as an owned string
pub fn path_of(file: &NamedTempFile) -> String {
    file.path().to_str().expect("utf-8 temp path").to_string()
}

/// Requested URLs, shared with the test after the fetcher is handed off
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Deterministic in-memory fetcher that records every requested URL
pub struct FakeFetcher {
    responses: HashMap<String, Vec<u8>>,
    calls: CallLog,
}

impl FakeFetcher {
    /// Fetcher that fails every request
    pub fn empty() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fetcher that serves `body` for `url` and fails everything else
    pub fn serving(url: &str, body: &[u8]) -> Self {
        let mut responses = HashMap::new();
        responses.insert(url.to_string(), body.to_vec());
        Self {
            responses,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle on the call log; clone before moving the fetcher into a builder
    pub fn call_log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

impl Fetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError {
                status: Some(404),
                message: format!("no fixture for {}", url),
            }),
        }
    }
}
