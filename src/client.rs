//! Async client for the Dev2Cloud sandbox API.
//!
//! `create_sandbox` is the core: it turns the server-side provisioning
//! workflow into a single call by polling the sandbox every second until
//! it reaches a terminal status or the deadline passes. Everything else
//! is a single request.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::Config;
use crate::error::Error;
use crate::models::{Sandbox, SandboxStatus, SandboxType};
use crate::transport::Transport;

/// Fixed interval between status polls.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default maximum wait for a sandbox to become ready.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Options for `create_sandbox`.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Name for get-or-create semantics: an existing sandbox with this
    /// name and matching type is returned instead of a new one.
    pub name: Option<String>,
    /// Maximum wait for the sandbox to become ready. Defaults to 180 s.
    pub timeout: Option<Duration>,
}

#[derive(Serialize)]
struct CreateSandboxRequest<'a> {
    sandbox_type: SandboxType,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Async client. Holds no state between calls beyond the HTTP connection.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            transport: Transport::new(&config)?,
        })
    }

    /// Construct a client with the API key from `D2C_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Config::from_env()?)
    }

    /// Create a sandbox and wait until it is ready.
    ///
    /// Provisions a sandbox of the given type and polls its status every
    /// second until it transitions to `running` or `failed`. When a name
    /// is supplied the endpoint behaves as get-or-create: an existing
    /// sandbox with that name and matching type is returned directly
    /// (possibly already running, in which case no polling happens); a
    /// name collision with a different type is rejected by the service
    /// and surfaced unmodified.
    pub async fn create_sandbox(
        &self,
        sandbox_type: SandboxType,
        options: CreateOptions,
    ) -> Result<Sandbox, Error> {
        let timeout = options.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let request = CreateSandboxRequest {
            sandbox_type,
            name: options.name.as_deref(),
        };

        tracing::info!(%sandbox_type, name = ?options.name, "creating sandbox");

        let initial = Sandbox::from_value(self.transport.post(&request).await?)?;
        let sandbox_id = match poll_step(initial) {
            PollStep::Ready(sandbox) => {
                tracing::info!(sandbox_id = %sandbox.id, "sandbox ready");
                return Ok(sandbox);
            }
            PollStep::Failed { id } => return Err(Error::provision_failed(&id)),
            PollStep::NotReady { id } => id,
        };

        // The deadline is checked before each sleep, so a timeout is
        // detected without one extra sleep-then-fetch cycle.
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() >= deadline {
                return Err(Error::provision_timeout(&sandbox_id, timeout));
            }
            tokio::time::sleep(POLL_INTERVAL).await;

            let sandbox = self.get_sandbox(&sandbox_id).await?;
            tracing::debug!(sandbox_id = %sandbox_id, status = ?sandbox.status, "polled sandbox");

            match poll_step(sandbox) {
                PollStep::Ready(sandbox) => {
                    tracing::info!(sandbox_id = %sandbox.id, "sandbox ready");
                    return Ok(sandbox);
                }
                PollStep::Failed { id } => return Err(Error::provision_failed(&id)),
                PollStep::NotReady { .. } => {}
            }
        }
    }

    /// Get a sandbox by its ID.
    pub async fn get_sandbox(&self, sandbox_id: &str) -> Result<Sandbox, Error> {
        Sandbox::from_value(self.transport.get(Some(sandbox_id)).await?)
    }

    /// List all active sandboxes for the authenticated user.
    pub async fn list_sandboxes(&self) -> Result<Vec<Sandbox>, Error> {
        let value = self.transport.get(None).await?;
        let items = match value {
            serde_json::Value::Array(items) => items,
            _ => return Err(Error::malformed("expected a JSON array of sandboxes")),
        };
        items.into_iter().map(Sandbox::from_value).collect()
    }

    /// Permanently delete a sandbox. Connection credentials are revoked
    /// immediately.
    pub async fn delete_sandbox(&self, sandbox_id: &str) -> Result<(), Error> {
        tracing::info!(sandbox_id = %sandbox_id, "deleting sandbox");
        self.transport.delete(sandbox_id).await
    }

    /// Delete all active sandboxes, best-effort.
    ///
    /// Individual deletion errors are swallowed so one failure never
    /// blocks the rest. Returns the IDs that were actually deleted.
    pub async fn delete_all(&self) -> Result<Vec<String>, Error> {
        let sandboxes = self.list_sandboxes().await?;
        let mut deleted = Vec::with_capacity(sandboxes.len());
        for sandbox in sandboxes {
            match self.delete_sandbox(&sandbox.id).await {
                Ok(()) => deleted.push(sandbox.id),
                Err(e) => {
                    tracing::warn!(sandbox_id = %sandbox.id, error = %e, "delete failed, continuing");
                }
            }
        }
        Ok(deleted)
    }
}

// ── Polling state machine ───────────────────────────────────────────

/// Outcome of observing one sandbox snapshot during provisioning.
///
/// `running` and `failed` are absorbing; anything not `pending` is
/// treated as ready. Pure — both the async loop and the blocking facade
/// share this decision.
enum PollStep {
    Ready(Sandbox),
    Failed { id: String },
    NotReady { id: String },
}

fn poll_step(sandbox: Sandbox) -> PollStep {
    match sandbox.status {
        SandboxStatus::Failed => PollStep::Failed { id: sandbox.id },
        SandboxStatus::Pending => PollStep::NotReady { id: sandbox.id },
        SandboxStatus::Running => PollStep::Ready(sandbox),
    }
}
