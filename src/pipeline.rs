//! One pass of the watcher
//!
//! load seen-set → fetch listing → parse → enrich untitled → gate →
//! post each → record delivered → save seen-set.
//!
//! The only errors that abort a pass are a failing seen-set store and an
//! unreachable listing page. Per-notice problems are logged and skipped; a
//! notice whose post failed is not recorded, so the next pass retries it.

use anyhow::Context;

use crate::config::Config;
use crate::core::models::{DeliveryOutcome, DeliveryRecord, NoticeCandidate, SeenSet};
use crate::core::ports::{PageFetcher, SeenStore, Sleeper, WebhookClient};
use crate::core::services::message::TEST_MESSAGE;
use crate::core::services::{
    Notifier, Strategy, enrich_titles, fill_placeholders, parse_listing, select,
};

/// What a pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Strategy that read the listing, if any did
    pub strategy: Option<Strategy>,
    /// Candidates found on the listing
    pub discovered: usize,
    /// Candidates chosen for delivery
    pub selected: usize,
    /// Delivery attempts, in posting order
    pub records: Vec<DeliveryRecord>,
    /// Size of the seen-set after the pass
    pub seen_total: usize,
}

impl RunSummary {
    /// Notices the webhook accepted
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.records.iter().filter(|r| r.is_delivered()).count()
    }

    /// Notices that failed and will be retried next pass
    #[must_use]
    pub fn failed(&self) -> usize {
        self.records.len() - self.delivered()
    }
}

/// The watcher, wired to its ports
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    config: &'a Config,
    fetcher: &'a dyn PageFetcher,
    webhook: &'a dyn WebhookClient,
    store: &'a dyn SeenStore,
    sleeper: &'a dyn Sleeper,
}

impl std::fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> Pipeline<'a> {
    /// Wire a pipeline
    pub const fn new(
        config: &'a Config,
        fetcher: &'a dyn PageFetcher,
        webhook: &'a dyn WebhookClient,
        store: &'a dyn SeenStore,
        sleeper: &'a dyn Sleeper,
    ) -> Self {
        Self {
            config,
            fetcher,
            webhook,
            store,
            sleeper,
        }
    }

    /// Run one pass
    pub fn run(&self) -> anyhow::Result<RunSummary> {
        let notifier = Notifier::new(self.webhook, self.sleeper)
            .with_fallback_retry(self.config.rate_limit_fallback);

        if self.config.force_test {
            match notifier.send(TEST_MESSAGE) {
                Ok(()) => log::info!("test message sent"),
                Err(e) => log::warn!("test message failed: {e}"),
            }
        }

        let mut seen = self.store.load().context("failed to load seen-set")?;

        let list_url = self.config.board.list_url().as_str();
        let html = self
            .fetcher
            .fetch(list_url)
            .with_context(|| format!("failed to fetch listing {list_url}"))?;

        let listing = parse_listing(&html, &self.config.board);
        let mut summary = RunSummary {
            strategy: listing.strategy,
            discovered: listing.notices.len(),
            seen_total: seen.len(),
            ..RunSummary::default()
        };
        match listing.strategy {
            Some(strategy) => {
                log::info!("found {} notice(s) with {strategy} strategy", summary.discovered);
            },
            None => log::warn!("no notices found on {list_url}"),
        }

        let mut candidates = listing.notices;
        if self.config.enrich_details {
            let unseen = candidates.iter_mut().filter(|c| !seen.contains(&c.identifier));
            let enriched = enrich_titles(unseen, self.fetcher);
            if enriched > 0 {
                log::info!("read {enriched} title(s) from detail pages");
            }
        }
        fill_placeholders(candidates.iter_mut());

        let batch = select(
            candidates,
            &seen,
            &self.config.keywords,
            self.config.max_per_run,
        );
        summary.selected = batch.len();
        if batch.is_empty() {
            log::info!("no new notices");
            return Ok(summary);
        }

        summary.records = self.deliver_all(&notifier, batch, &mut seen);
        self.store.save(&seen).context("failed to save seen-set")?;
        summary.seen_total = seen.len();
        Ok(summary)
    }

    fn deliver_all(
        &self,
        notifier: &Notifier<'_>,
        batch: Vec<NoticeCandidate>,
        seen: &mut SeenSet,
    ) -> Vec<DeliveryRecord> {
        let mut records = Vec::with_capacity(batch.len());
        for (i, notice) in batch.into_iter().enumerate() {
            if i > 0 {
                self.sleeper.sleep(self.config.delivery_delay);
            }
            let outcome = match notifier.deliver(&notice) {
                Ok(()) => {
                    log::info!("sent {} {}", notice.identifier, notice.title);
                    seen.insert(notice.identifier.clone());
                    DeliveryOutcome::Delivered
                },
                Err(e) => {
                    log::warn!("failed to send {}: {e}", notice.identifier);
                    DeliveryOutcome::Failed(e.to_string())
                },
            };
            records.push(DeliveryRecord { notice, outcome });
        }
        records
    }
}
