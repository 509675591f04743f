use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use log::{info, warn};
use tokio::sync::OnceCell;
use tokio::{select, time};
use tokio_util::sync::CancellationToken;
use crate::server::menu::backoff::Backoff;
use crate::server::model::menu::Menu;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Loaded-once price list shared with the request handlers.
pub(crate) type MenuCell = Arc<OnceCell<Menu>>;

/// Fetches the price list from the pricing source and caches it for the process lifetime.
pub(crate) struct MenuClient {
    http: reqwest::Client,
    prices_url: String,
    menu: MenuCell,
}

impl MenuClient {
    pub fn new(pricing_endpoint: &str, menu: MenuCell) -> anyhow::Result<Self> {
        Self::with_timeout(pricing_endpoint, menu, FETCH_TIMEOUT)
    }

    /// Same as `new` with a custom per-attempt timeout, an expired attempt counts as a failure.
    pub fn with_timeout(pricing_endpoint: &str, menu: MenuCell, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build pricing http client")?;
        Ok(Self {
            http,
            prices_url: format!("{}/prices", pricing_endpoint.trim_end_matches('/')),
            menu,
        })
    }

    async fn fetch(&self) -> anyhow::Result<Menu> {
        self.http
            .get(&self.prices_url)
            .send()
            .await
            .context("pricing source unreachable")?
            .error_for_status()
            .context("pricing source answered with an error")?
            .json::<Menu>()
            .await
            .context("malformed price list")
    }

    /// Retry until the price list is cached. Returns `None` only if cancelled first.
    pub async fn load(&self, mut backoff: Backoff, cancel_token: &CancellationToken) -> Option<&Menu> {
        let mut failures = 0_u64;
        loop {
            if let Some(menu) = self.menu.get() {
                return Some(menu);
            }
            match self.fetch().await {
                Ok(menu) => {
                    info!(
                        "loaded menu from {}, food={}, drinks={}",
                        self.prices_url,
                        menu.food.len(),
                        menu.drinks.len()
                    );
                    // set once, a concurrent winner is kept
                    let _ = self.menu.set(menu);
                    continue;
                }
                Err(e) => {
                    failures += 1;
                    let delay = backoff.next_delay();
                    warn!(
                        "failed to load menu (failure {}), retrying in {}ms, {:#}",
                        failures,
                        delay.as_millis(),
                        e
                    );
                    select! {
                        _ = time::sleep(delay) => {},
                        _ = cancel_token.cancelled() => {
                            info!("received cancel signal, menu not loaded");
                            return None;
                        }
                    }
                }
            }
        }
    }
}
