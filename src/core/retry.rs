use crate::utils::error::BceError;
use std::time::Duration;

pub const DEFAULT_MAX_ERROR_RETRY: u32 = 3;
pub const DEFAULT_MAX_DELAY_IN_MILLIS: u64 = 20_000;
pub const DEFAULT_BASE_INTERVAL_IN_MILLIS: u64 = 300;

const REQUEST_EXPIRED: &str = "RequestExpired";

pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// `attempts` counts the retries already made (0 for the first failure).
    fn should_retry(&self, err: &BceError, attempts: u32) -> bool;
    fn delay_before_next_retry(&self, err: &BceError, attempts: u32) -> Duration;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoRetryPolicy;

impl RetryPolicy for NoRetryPolicy {
    fn should_retry(&self, _err: &BceError, _attempts: u32) -> bool {
        false
    }

    fn delay_before_next_retry(&self, _err: &BceError, _attempts: u32) -> Duration {
        Duration::ZERO
    }
}

/// 指數退避：`base_interval * 2^attempts`，上限 `max_delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackOffRetryPolicy {
    max_error_retry: u32,
    max_delay: Duration,
    base_interval: Duration,
}

impl Default for BackOffRetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_ERROR_RETRY,
            Duration::from_millis(DEFAULT_MAX_DELAY_IN_MILLIS),
            Duration::from_millis(DEFAULT_BASE_INTERVAL_IN_MILLIS),
        )
    }
}

impl BackOffRetryPolicy {
    pub fn new(max_error_retry: u32, max_delay: Duration, base_interval: Duration) -> Self {
        Self {
            max_error_retry,
            max_delay,
            base_interval,
        }
    }

    pub fn max_error_retry(&self) -> u32 {
        self.max_error_retry
    }
}

impl RetryPolicy for BackOffRetryPolicy {
    fn should_retry(&self, err: &BceError, attempts: u32) -> bool {
        if attempts >= self.max_error_retry {
            return false;
        }

        match err {
            BceError::HttpError(_) | BceError::IoError(_) => true,
            BceError::ServiceError(service) => {
                matches!(service.status_code, 500 | 502 | 503 | 504)
                    || service.code == REQUEST_EXPIRED
            }
            _ => false,
        }
    }

    fn delay_before_next_retry(&self, _err: &BceError, attempts: u32) -> Duration {
        let factor = 1u32.checked_shl(attempts).unwrap_or(u32::MAX);
        self.base_interval
            .checked_mul(factor)
            .map(|delay| delay.min(self.max_delay))
            .unwrap_or(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BceServiceError;

    fn service_error(code: &str, status: u16) -> BceError {
        BceServiceError::new(code, "message", "req", status).into()
    }

    #[test]
    fn test_retries_on_server_errors_only() {
        let policy = BackOffRetryPolicy::default();
        assert!(policy.should_retry(&service_error("InternalError", 500), 0));
        assert!(policy.should_retry(&service_error("ServiceUnavailable", 503), 1));
        assert!(policy.should_retry(&service_error("RequestExpired", 400), 0));
        assert!(!policy.should_retry(&service_error("NoSuchUser", 404), 0));
        assert!(!policy.should_retry(&service_error("AccessDenied", 403), 0));
        assert!(!policy.should_retry(&BceError::invalid_argument("bad"), 0));
    }

    #[test]
    fn test_stops_after_max_error_retry() {
        let policy = BackOffRetryPolicy::default();
        let err = service_error("InternalError", 500);
        assert!(policy.should_retry(&err, 2));
        assert!(!policy.should_retry(&err, 3));
    }

    #[test]
    fn test_backoff_delay_is_capped() {
        let policy = BackOffRetryPolicy::new(
            10,
            Duration::from_millis(1_000),
            Duration::from_millis(100),
        );
        let err = service_error("InternalError", 500);
        assert_eq!(policy.delay_before_next_retry(&err, 0), Duration::from_millis(100));
        assert_eq!(policy.delay_before_next_retry(&err, 2), Duration::from_millis(400));
        assert_eq!(policy.delay_before_next_retry(&err, 5), Duration::from_millis(1_000));
        assert_eq!(policy.delay_before_next_retry(&err, 40), Duration::from_millis(1_000));
    }

    #[test]
    fn test_no_retry_policy() {
        let err = service_error("InternalError", 500);
        assert!(!NoRetryPolicy.should_retry(&err, 0));
        assert_eq!(NoRetryPolicy.delay_before_next_retry(&err, 0), Duration::ZERO);
    }
}
