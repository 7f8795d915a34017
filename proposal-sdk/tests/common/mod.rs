#![allow(dead_code)]

use async_trait::async_trait;
use proposal_sdk::{DocumentSink, ProposalError};
use std::path::PathBuf;
use std::sync::Mutex;

/// Sink that keeps saved documents in memory
#[derive(Default)]
pub struct RecordingSink {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingSink {
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentSink for RecordingSink {
    async fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ProposalError> {
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), contents.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}

/// Sink whose save always fails
pub struct FailingSink;

#[async_trait]
impl DocumentSink for FailingSink {
    async fn save(&self, _file_name: &str, _contents: &[u8]) -> Result<PathBuf, ProposalError> {
        Err(ProposalError::unexpected("disk full"))
    }
}

pub const FAKE_PDF: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF";

/// An address nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
