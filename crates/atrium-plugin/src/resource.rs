// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource access for page content.
//!
//! A page descriptor carries an opaque locator used to open its content as a
//! byte stream. The [`PageResource`] trait abstracts the mechanism; adapters
//! exist for filesystem-backed plugin files and for static in-memory content,
//! so the registry core never depends on any one storage scheme.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use atrium_core::AtriumError;

/// Capability interface mapping a resource locator to its content bytes.
///
/// Implementations read the resource in full and release every underlying
/// handle before returning, on success and failure alike.
#[async_trait]
pub trait PageResource: Send + Sync {
    /// Open the resource and read it fully.
    async fn open(&self) -> Result<Vec<u8>, AtriumError>;

    /// Human-readable locator description, used in diagnostics only.
    fn describe(&self) -> String;
}

/// Filesystem-backed page resource, pointing at a file inside a plugin
/// directory.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PageResource for FileResource {
    async fn open(&self) -> Result<Vec<u8>, AtriumError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| AtriumError::Resource {
                message: format!("failed to read {}", self.path.display()),
                source: Some(Box::new(e)),
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Static in-memory page resource: content compiled into the binary or
/// handed over directly by a plugin source.
#[derive(Debug, Clone)]
pub struct StaticResource {
    bytes: Arc<[u8]>,
}

impl StaticResource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into().into(),
        }
    }
}

#[async_trait]
impl PageResource for StaticResource {
    async fn open(&self) -> Result<Vec<u8>, AtriumError> {
        Ok(self.bytes.to_vec())
    }

    fn describe(&self) -> String {
        format!("<static, {} bytes>", self.bytes.len())
    }
}
