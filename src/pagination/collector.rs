//! Collection fetcher
//!
//! Retrieves every page of a resource. Page 1 is fetched on its own because
//! it is the only way to learn `lastPage`; pages 2..=lastPage are then
//! launched one by one, each after the pacing delay, and run concurrently.
//!
//! Each worker hands its page's records back through the `JoinSet`, so the
//! aggregate is only ever touched by the scheduling task. The first failure
//! observed stops further launches and aborts whatever is still in flight.

use super::types::PageSource;
use crate::error::{Error, Result};
use crate::types::{RawRecord, DEFAULT_PACING};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

type PageResult = Result<(u32, Vec<RawRecord>)>;

/// Fetches all pages of a resource with paced, concurrent page requests
#[derive(Debug)]
pub struct CollectionFetcher<S> {
    source: Arc<S>,
    pacing: Duration,
}

impl<S> Clone for CollectionFetcher<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            pacing: self.pacing,
        }
    }
}

impl<S: PageSource + 'static> CollectionFetcher<S> {
    /// Create a fetcher with the default 300 ms pacing
    pub fn new(source: Arc<S>) -> Self {
        Self::with_pacing(source, DEFAULT_PACING)
    }

    /// Create a fetcher with a custom pacing delay
    pub fn with_pacing(source: Arc<S>, pacing: Duration) -> Self {
        Self { source, pacing }
    }

    /// Page source driven by this fetcher
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Pacing delay between page launches
    pub fn pacing(&self) -> Duration {
        self.pacing
    }

    /// Fetch every record of `resource`
    ///
    /// Records come back in no particular page order. On any failure the
    /// error is returned and no records are.
    pub async fn fetch_all(&self, resource: &str, filter: Option<&str>) -> Result<Vec<RawRecord>> {
        let first = self.source.fetch_page(resource, filter, 1).await?;
        let last_page = first.page_info()?.page_count()?;
        let mut records = first.records;

        if last_page <= 1 {
            debug!(
                "{}: single page ({} records, lastPage={})",
                resource,
                records.len(),
                last_page
            );
            return Ok(records);
        }

        info!("{}: fetching pages 2..={}", resource, last_page);

        let resource: Arc<str> = Arc::from(resource);
        let filter: Option<Arc<str>> = filter.map(Arc::from);
        let mut tasks: JoinSet<PageResult> = JoinSet::new();

        for page in 2..=last_page {
            // Drain finished pages while pacing so a failure stops the launches.
            let pacing = tokio::time::sleep(self.pacing);
            tokio::pin!(pacing);

            let failure = loop {
                tokio::select! {
                    () = &mut pacing => break None,
                    Some(joined) = tasks.join_next() => match settle(joined) {
                        Ok(page_records) => records.extend(page_records),
                        Err(e) => break Some(e),
                    },
                }
            };
            if let Some(err) = failure {
                return Err(abort(&mut tasks, &resource, err));
            }

            let source = Arc::clone(&self.source);
            let resource = Arc::clone(&resource);
            let filter = filter.clone();
            debug!("{}: launching page {}", resource, page);
            tasks.spawn(async move {
                source
                    .fetch_page(&resource, filter.as_deref(), page)
                    .await
                    .map(|envelope| (page, envelope.records))
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match settle(joined) {
                Ok(page_records) => records.extend(page_records),
                Err(e) => return Err(abort(&mut tasks, &resource, e)),
            }
        }

        info!(
            "{}: fetched {} records across {} pages",
            resource,
            records.len(),
            last_page
        );
        Ok(records)
    }
}

/// Unwrap a joined worker into its page's records
fn settle(joined: std::result::Result<PageResult, JoinError>) -> Result<Vec<RawRecord>> {
    match joined {
        Ok(Ok((page, page_records))) => {
            debug!("page {} done: {} records", page, page_records.len());
            Ok(page_records)
        }
        Ok(Err(e)) => Err(e),
        Err(e) => Err(Error::TaskFailed {
            message: e.to_string(),
        }),
    }
}

fn abort(tasks: &mut JoinSet<PageResult>, resource: &str, err: Error) -> Error {
    warn!(
        "{}: page fetch failed, cancelling {} in-flight pages: {}",
        resource,
        tasks.len(),
        err
    );
    tasks.abort_all();
    err
}
