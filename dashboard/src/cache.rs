//! In-memory memoization of history fetches.
//!
//! Keyed by the full request triple, so the same symbol at two different
//! ranges occupies two entries. The cache is never authoritative: every
//! entry is reproducible from its key, so there is no eviction or
//! persistence. Unbounded is fine at interactive scale (a handful of
//! symbols per run).

use std::collections::HashMap;

use market_data::{DataProvider, FetchedHistory, HistoryRequest, ProviderError};
use tracing::debug;

#[derive(Debug, Default)]
pub struct FetchCache {
    entries: HashMap<HistoryRequest, FetchedHistory>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cached result for `request`, fetching and storing it on
    /// a miss. Failed fetches are not cached, so a retry goes back to the
    /// provider.
    pub async fn get_or_fetch(
        &mut self,
        provider: &dyn DataProvider,
        request: &HistoryRequest,
    ) -> Result<FetchedHistory, ProviderError> {
        if let Some(hit) = self.entries.get(request) {
            debug!(symbol = %request.symbol, period = %request.period, interval = %request.interval, "cache hit");
            return Ok(hit.clone());
        }

        debug!(symbol = %request.symbol, period = %request.period, interval = %request.interval, "cache miss, fetching");
        let fetched = provider.fetch_history(request).await?;
        self.entries.insert(request.clone(), fetched.clone());
        Ok(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use market_data::{Interval, Period, PriceSeries, SymbolInfo};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts fetches; fails for the symbol "FAIL".
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DataProvider for CountingProvider {
        async fn fetch_history(
            &self,
            request: &HistoryRequest,
        ) -> Result<FetchedHistory, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.symbol == "FAIL" {
                return Err(ProviderError::Api("boom".to_string()));
            }
            Ok(FetchedHistory {
                series: PriceSeries::empty(request.symbol.clone(), request.interval),
                info: SymbolInfo::default(),
            })
        }
    }

    fn request(symbol: &str, period: Period) -> HistoryRequest {
        HistoryRequest::new(symbol, period, Interval::Day)
    }

    #[tokio::test]
    async fn repeated_requests_fetch_once() {
        let provider = CountingProvider::default();
        let mut cache = FetchCache::new();
        let req = request("AAPL", Period::YearToDate);

        cache.get_or_fetch(&provider, &req).await.unwrap();
        cache.get_or_fetch(&provider, &req).await.unwrap();
        cache.get_or_fetch(&provider, &req).await.unwrap();

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn distinct_ranges_are_distinct_entries() {
        let provider = CountingProvider::default();
        let mut cache = FetchCache::new();

        cache
            .get_or_fetch(&provider, &request("AAPL", Period::YearToDate))
            .await
            .unwrap();
        cache
            .get_or_fetch(&provider, &request("AAPL", Period::Max))
            .await
            .unwrap();

        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn failed_fetches_are_not_cached() {
        let provider = CountingProvider::default();
        let mut cache = FetchCache::new();
        let req = request("FAIL", Period::YearToDate);

        assert!(cache.get_or_fetch(&provider, &req).await.is_err());
        assert!(cache.get_or_fetch(&provider, &req).await.is_err());

        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }
}
