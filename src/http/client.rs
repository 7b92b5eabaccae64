use std::time::Duration;

use reqwest::Client;

use crate::error::AppResult;

/// Idle connections retained when keep-alive is on.
const KEEP_ALIVE_POOL_SIZE: usize = 100;
/// Idle connections are recycled after this much inactivity.
const KEEP_ALIVE_IDLE_TIMEOUT: Duration = Duration::from_secs(45);

/// Builds the HTTP client shared by every request task in one run.
///
/// With keep-alive the idle pool holds up to 100 connections per host for
/// 45 seconds; without it the pool retains nothing, so each request opens a
/// fresh connection.
///
/// # Errors
///
/// Returns an error when the underlying client (TLS backend, resolver)
/// cannot be initialized.
pub fn build_client(keep_alive: bool) -> AppResult<Client> {
    let builder = if keep_alive {
        Client::builder()
            .pool_max_idle_per_host(KEEP_ALIVE_POOL_SIZE)
            .pool_idle_timeout(Some(KEEP_ALIVE_IDLE_TIMEOUT))
    } else {
        Client::builder()
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(Duration::from_secs(0)))
    };

    builder
        .build()
        .map_err(|err| format!("Failed to build HTTP client: {}", err).into())
}
