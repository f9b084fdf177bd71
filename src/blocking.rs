//! Blocking facade over the async client.
//!
//! Owns a private current-thread tokio runtime and delegates every call
//! with `block_on`, so polling semantics (deadline arithmetic, 1-second
//! interval, terminal-state detection) are exactly the async client's.
//! Must not be used from inside an async runtime.

use crate::client::CreateOptions;
use crate::config::Config;
use crate::error::Error;
use crate::models::{Sandbox, SandboxType};

/// Blocking client. The calling thread suspends during polls.
pub struct Client {
    inner: crate::Client,
    runtime: tokio::runtime::Runtime,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            inner: crate::Client::new(config)?,
            runtime,
        })
    }

    /// Construct a client with the API key from `D2C_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Config::from_env()?)
    }

    /// Create a sandbox and block until it is ready. See
    /// [`crate::Client::create_sandbox`].
    pub fn create_sandbox(
        &self,
        sandbox_type: SandboxType,
        options: CreateOptions,
    ) -> Result<Sandbox, Error> {
        self.runtime
            .block_on(self.inner.create_sandbox(sandbox_type, options))
    }

    /// Get a sandbox by its ID.
    pub fn get_sandbox(&self, sandbox_id: &str) -> Result<Sandbox, Error> {
        self.runtime.block_on(self.inner.get_sandbox(sandbox_id))
    }

    /// List all active sandboxes for the authenticated user.
    pub fn list_sandboxes(&self) -> Result<Vec<Sandbox>, Error> {
        self.runtime.block_on(self.inner.list_sandboxes())
    }

    /// Permanently delete a sandbox.
    pub fn delete_sandbox(&self, sandbox_id: &str) -> Result<(), Error> {
        self.runtime.block_on(self.inner.delete_sandbox(sandbox_id))
    }

    /// Delete all active sandboxes, best-effort. Returns the IDs that
    /// were actually deleted.
    pub fn delete_all(&self) -> Result<Vec<String>, Error> {
        self.runtime.block_on(self.inner.delete_all())
    }
}
