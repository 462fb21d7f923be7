use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use crate::config::Config;
use crate::error::AppError;

/// Per-client request budget: `max_requests` per `window`, refilled evenly.
pub struct ClientRateLimiter {
    limiter: DefaultKeyedRateLimiter<IpAddr>,
}

impl ClientRateLimiter {
    /// Returns `None` when `max_requests` is zero.
    pub fn new(max_requests: u32, window: Duration) -> Option<Self> {
        let burst = NonZeroU32::new(max_requests)?;
        let quota = Quota::with_period(window / max_requests)?.allow_burst(burst);
        Some(Self { limiter: RateLimiter::keyed(quota) })
    }

    pub fn from_config(config: &Config) -> Option<Self> {
        Self::new(config.rate_limit_max, Duration::from_secs(config.rate_limit_window_secs))
    }

    pub fn check(&self, client: IpAddr) -> Result<(), AppError> {
        self.limiter.check_key(&client).map_err(|_| AppError::RateLimited)
    }
}

pub async fn enforce_rate_limit(
    State(limiter): State<Arc<ClientRateLimiter>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = client_ip(&request);
    if let Err(e) = limiter.check(client) {
        warn!("Rate limit exceeded for {}", client);
        return Err(e);
    }
    Ok(next.run(request).await)
}

// Connections without peer info (in-process callers) share one bucket.
fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}
