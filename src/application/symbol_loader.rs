use crate::application::retry::{RetryPolicy, Sleeper, retry_with_policy};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::MarketDataRepository;
use crate::domain::state::AppEvent;
use crate::{log_error, log_info, log_warn};

pub const SYMBOLS_FAILED_MESSAGE: &str = "Could not load stock symbols after multiple attempts.";

/// Fetches the symbol list once per page load, retrying under a bounded policy.
pub struct SymbolLoader<S> {
    policy: RetryPolicy,
    sleeper: S,
}

impl<S: Sleeper> SymbolLoader<S> {
    pub fn new(policy: RetryPolicy, sleeper: S) -> Self {
        Self { policy, sleeper }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Resolves to `SymbolsLoaded` or, once every attempt failed, `SymbolsFailed`.
    pub async fn load<R: MarketDataRepository>(&self, repository: &R) -> AppEvent {
        let result = retry_with_policy(
            &self.policy,
            &self.sleeper,
            |attempt| {
                log_info!(
                    LogComponent::Application("SymbolLoader"),
                    "fetching symbols (attempt {}/{})",
                    attempt,
                    self.policy.max_attempts()
                );
                repository.fetch_symbols()
            },
            |attempt, retries_left, error| {
                log_warn!(
                    LogComponent::Application("SymbolLoader"),
                    "attempt {} failed (retries left: {}): {}",
                    attempt,
                    retries_left,
                    error
                );
            },
        )
        .await;

        match result {
            Ok(symbols) => AppEvent::SymbolsLoaded(symbols),
            Err(exhausted) => {
                log_error!(
                    LogComponent::Application("SymbolLoader"),
                    "giving up after {} attempts: {}",
                    exhausted.attempts,
                    exhausted.last_error
                );
                AppEvent::SymbolsFailed(SYMBOLS_FAILED_MESSAGE.to_string())
            }
        }
    }
}
