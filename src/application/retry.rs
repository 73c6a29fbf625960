use std::future::Future;
use std::time::Duration;

/// How long to wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayStrategy {
    Fixed(Duration),
    /// Doubles after every failure, capped at `max`.
    Exponential { initial: Duration, max: Duration },
}

/// Bounded retry: at most `max_attempts` tries, with a delay between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: DelayStrategy,
}

impl Default for RetryPolicy {
    /// Five attempts, five seconds apart.
    fn default() -> Self {
        Self::fixed(5, Duration::from_millis(5000))
    }
}

impl RetryPolicy {
    pub const fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay: DelayStrategy::Fixed(delay) }
    }

    pub const fn exponential(max_attempts: u32, initial: Duration, max: Duration) -> Self {
        Self { max_attempts, delay: DelayStrategy::Exponential { initial, max } }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the attempt following failed `attempt` (1-based), or
    /// `None` once the budget is spent.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        Some(match self.delay {
            DelayStrategy::Fixed(delay) => delay,
            DelayStrategy::Exponential { initial, max } => {
                let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
                initial.saturating_mul(factor).min(max)
            }
        })
    }
}

/// Non-blocking wait. The browser build uses timers; tests record the calls.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// `setTimeout`-backed sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSleeper;

impl Sleeper for TimerSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

/// The operation failed on every allowed attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryExhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

/// Run `operation` under `policy`. `on_failure` sees the failed attempt
/// number, the attempts left and the error, before any wait.
pub async fn retry_with_policy<T, E, Op, Fut, S, F>(
    policy: &RetryPolicy,
    sleeper: &S,
    mut operation: Op,
    mut on_failure: F,
) -> Result<T, RetryExhausted<E>>
where
    Op: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    S: Sleeper,
    F: FnMut(u32, u32, &E),
{
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) => {
                on_failure(attempt, policy.max_attempts().saturating_sub(attempt), &error);
                match policy.delay_after(attempt) {
                    Some(delay) => {
                        sleeper.sleep(delay).await;
                        attempt += 1;
                    }
                    None => return Err(RetryExhausted { attempts: attempt, last_error: error }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_delay_until_budget_spent() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Some(Duration::from_millis(5000)));
        assert_eq!(policy.delay_after(4), Some(Duration::from_millis(5000)));
        assert_eq!(policy.delay_after(5), None);
    }

    #[test]
    fn exponential_delay_doubles_and_caps() {
        let policy =
            RetryPolicy::exponential(8, Duration::from_secs(1), Duration::from_secs(32));
        let delays: Vec<u64> = (1..8).filter_map(|a| policy.delay_after(a)).map(|d| d.as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8, 16, 32, 32]);
    }

    #[test]
    fn zero_attempt_policy_never_waits() {
        let policy = RetryPolicy::fixed(0, Duration::from_secs(1));
        assert_eq!(policy.delay_after(1), None);
    }
}
