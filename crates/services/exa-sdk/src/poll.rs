//! Poll-until-terminal helper shared by websets, imports and research tasks.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::ExaError;

/// Default delay between polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Default overall deadline for a polling operation
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Timing parameters for polling helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Delay between consecutive fetches
    pub interval: Duration,
    /// Overall deadline, measured from the first fetch
    pub timeout: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

impl PollOptions {
    /// Sets the polling interval
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the overall timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Where a polled resource currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    /// Still changing; keep polling
    Pending,
    /// Reached the desired terminal state
    Succeeded,
    /// Reached a failure terminal state, with the server's reason
    Failed(String),
}

/// A server-owned resource whose status can be polled
pub trait Pollable {
    /// Resource kind used in errors and logs (e.g. `"import"`)
    const RESOURCE: &'static str;

    /// Resource id
    fn poll_id(&self) -> &str;

    /// Raw status string, for error reporting
    fn poll_status(&self) -> String;

    /// Classifies the current status
    fn poll_state(&self) -> PollState;
}

/// Fetches a resource until it reaches a terminal state or `opts.timeout` passes.
///
/// Each fetched value is handed to `on_poll` before classification. Status is
/// checked for success, then failure, then the deadline.
///
/// # Errors
///
/// Returns the fetch error as is, [`ExaError::ResourceFailed`] when the
/// resource fails server-side, or [`ExaError::Timeout`] past the deadline.
pub async fn poll_until_terminal<T, F, Fut, P>(
    opts: PollOptions,
    mut fetch: F,
    mut on_poll: P,
) -> Result<T, ExaError>
where
    T: Pollable,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ExaError>>,
    P: FnMut(&T),
{
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let current = fetch().await?;
        on_poll(&current);

        tracing::debug!(
            resource = T::RESOURCE,
            id = current.poll_id(),
            status = %current.poll_status(),
            attempt,
            "polled resource"
        );

        match current.poll_state() {
            PollState::Succeeded => return Ok(current),
            PollState::Failed(message) => {
                return Err(ExaError::ResourceFailed {
                    resource: T::RESOURCE,
                    id: current.poll_id().to_string(),
                    status: current.poll_status(),
                    message,
                });
            }
            PollState::Pending => {}
        }

        let elapsed = started.elapsed();
        if elapsed >= opts.timeout {
            return Err(ExaError::Timeout {
                operation: format!("{} {}", T::RESOURCE, current.poll_id()),
                elapsed,
            });
        }

        tokio::time::sleep(opts.interval.min(opts.timeout - elapsed)).await;
    }
}
