//! Immutable payload snapshots.

use serde::de::DeserializeOwned;
use std::time::SystemTime;

use crate::error::DecodeError;

/// The bytes of one successful fetch together with when it landed.
///
/// Snapshots are never mutated; a refresh replaces the whole value.
#[derive(Debug)]
pub struct Snapshot {
    bytes: Vec<u8>,
    generation: u64,
    fetched_at: SystemTime,
}

impl Snapshot {
    pub fn new(bytes: Vec<u8>, generation: u64) -> Self {
        Self {
            bytes,
            generation,
            fetched_at: SystemTime::now(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 0 for the initial load, incremented by every successful refresh.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fetched_at(&self) -> SystemTime {
        self.fetched_at
    }

    /// Decode the payload as JSON into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(&self.bytes)?)
    }
}
