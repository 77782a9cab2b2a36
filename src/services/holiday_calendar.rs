use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::backend::{BackendError, HolidayProvider};
use crate::calendar::HolidaySet;

/// Holiday sets memoised per tenant, so one set serves a whole session of
/// previews and submissions.
#[derive(Clone)]
pub struct HolidayCalendar {
    provider: Arc<dyn HolidayProvider>,
    cache: Cache<String, Arc<HolidaySet>>,
}

impl HolidayCalendar {
    pub fn new(provider: Arc<dyn HolidayProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            cache: Cache::builder()
                .max_capacity(1_000)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn holidays(&self, tenant_id: &str) -> Result<Arc<HolidaySet>, BackendError> {
        let provider = Arc::clone(&self.provider);
        let tenant = tenant_id.to_string();

        self.cache
            .try_get_with(tenant_id.to_string(), async move {
                let holidays = provider.fetch_holidays(&tenant).await?;
                log::debug!("Loaded {} holidays for tenant {}", holidays.len(), tenant);
                Ok::<_, BackendError>(Arc::new(holidays))
            })
            .await
            .map_err(|err: Arc<BackendError>| (*err).clone())
    }

    /// Drops the cached set so the next read goes to the provider.
    pub async fn invalidate(&self, tenant_id: &str) {
        self.cache.invalidate(tenant_id).await;
    }
}
