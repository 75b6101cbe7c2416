//! End-to-end passes over in-memory ports
//!
//! Each test wires a `Pipeline` to a mock fetcher, a scripted webhook, an
//! in-memory seen-set and a recording sleeper, then checks what was posted
//! and what was persisted.

use crate::common::fixtures::{
    LIST_URL, ONCLICK_PAGE, config, detail_page, detail_url, table_listing, titled_listing,
};
use crate::common::mocks::{MemorySeenStore, MockFetcher, RecordingSleeper, ScriptedWebhook};
use noticewatch::core::models::DeliveryOutcome;
use noticewatch::core::services::KeywordFilter;
use noticewatch::core::services::message::TEST_MESSAGE;
use noticewatch::{Config, Pipeline, RunSummary};
use std::time::Duration;

/// Run one pass with the given ports
fn run(
    config: &Config,
    fetcher: &MockFetcher,
    webhook: &ScriptedWebhook,
    store: &MemorySeenStore,
    sleeper: &RecordingSleeper,
) -> anyhow::Result<RunSummary> {
    Pipeline::new(config, fetcher, webhook, store, sleeper).run()
}

fn posted_ids(webhook: &ScriptedWebhook) -> Vec<u32> {
    webhook
        .posts()
        .iter()
        .filter_map(|m| m.rsplit("articleNo=").next()?.parse().ok())
        .collect()
}

// =============================================================================
// FIRST RUN AND IDEMPOTENCE
// =============================================================================

#[test]
fn test_first_run_posts_everything_oldest_first() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[103, 102, 101]));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.discovered, 3);
    assert_eq!(summary.delivered(), 3);
    assert_eq!(summary.seen_total, 3);
    assert_eq!(posted_ids(&webhook), vec![101, 102, 103]);
    assert_eq!(store.saves(), 1);
    assert!(store.snapshot().contains("articleNo:101"));
    assert!(webhook.posts()[0].contains("**제목**: 공지 101"));
}

#[test]
fn test_second_run_posts_nothing() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[2, 1]));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();
    let second = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(second.selected, 0);
    assert!(second.records.is_empty());
    assert_eq!(webhook.posts().len(), 2);
    // Nothing new, nothing written
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_only_new_notices_are_posted() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[12, 11, 10]));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::with_ids(&["articleNo:10", "articleNo:11"]);
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(posted_ids(&webhook), vec![12]);
    assert_eq!(summary.seen_total, 3);
}

// =============================================================================
// BATCH CAP AND PACING
// =============================================================================

#[test]
fn test_batch_cap_keeps_most_recent() {
    let config = config();
    let page: Vec<u32> = (1..=15).rev().collect();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&page));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.discovered, 15);
    assert_eq!(summary.delivered(), 10);
    assert_eq!(posted_ids(&webhook), (6..=15).collect::<Vec<_>>());

    let seen = store.snapshot();
    assert_eq!(seen.len(), 10);
    assert!(!seen.contains("articleNo:5"));
}

#[test]
fn test_delay_between_posts_only() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[3, 2, 1]));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(sleeper.naps(), vec![config.delivery_delay; 2]);
}

// =============================================================================
// FILTERING
// =============================================================================

#[test]
fn test_keyword_filter_blocks_non_matching() {
    let mut config = config();
    config.keywords = KeywordFilter::new(&["scholarship"]).unwrap();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &titled_listing(&[(50, "Library hours update")]));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.discovered, 1);
    assert_eq!(summary.selected, 0);
    assert!(webhook.posts().is_empty());
    assert!(store.snapshot().is_empty());
    assert_eq!(store.saves(), 0);
}

#[test]
fn test_keyword_filter_passes_matching() {
    let mut config = config();
    config.keywords = KeywordFilter::new(&["scholarship"]).unwrap();
    let fetcher = MockFetcher::new().with_page(
        LIST_URL,
        &titled_listing(&[(52, "New Scholarship Program"), (51, "Library hours update")]),
    );
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(posted_ids(&webhook), vec![52]);
    assert!(!store.snapshot().contains("articleNo:51"));
}

// =============================================================================
// DELIVERY FAILURES
// =============================================================================

#[test]
fn test_failed_delivery_is_retried_next_run() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[3, 2, 1]));
    let webhook = ScriptedWebhook::new()
        .respond(204, "")
        .respond(500, "internal error")
        .respond(204, "");
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.delivered(), 2);
    assert_eq!(summary.failed(), 1);
    assert!(matches!(summary.records[1].outcome, DeliveryOutcome::Failed(_)));
    assert!(!store.snapshot().contains("articleNo:2"));

    let retry = ScriptedWebhook::new();
    run(&config, &fetcher, &retry, &store, &sleeper).unwrap();

    assert_eq!(posted_ids(&retry), vec![2]);
    assert_eq!(store.snapshot().len(), 3);
}

#[test]
fn test_rate_limited_delivery_waits_and_succeeds() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[7]));
    let webhook = ScriptedWebhook::new()
        .respond(429, r#"{"retry_after": 1.5}"#)
        .respond(204, "");
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.delivered(), 1);
    assert_eq!(posted_ids(&webhook), vec![7, 7]);
    assert_eq!(sleeper.naps(), vec![Duration::from_millis(1500)]);
    assert!(store.snapshot().contains("articleNo:7"));
}

#[test]
fn test_all_deliveries_failing_still_saves_unchanged_set() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[9]));
    let webhook = ScriptedWebhook::new().fail("connection refused");
    let store = MemorySeenStore::with_ids(&["articleNo:1"]);
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.failed(), 1);
    assert_eq!(store.snapshot().len(), 1);
}

// =============================================================================
// FATAL ERRORS
// =============================================================================

#[test]
fn test_unreachable_listing_aborts_run() {
    let config = config();
    let fetcher = MockFetcher::new();
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::with_ids(&["articleNo:1"]);
    let sleeper = RecordingSleeper::new();

    let err = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap_err();

    assert!(format!("{err:#}").contains("failed to fetch listing"));
    assert!(webhook.posts().is_empty());
    assert_eq!(store.saves(), 0);
}

#[test]
fn test_unparseable_listing_is_not_an_error() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, "<html><body>점검 중입니다</body></html>");
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.strategy, None);
    assert_eq!(summary.discovered, 0);
    assert!(webhook.posts().is_empty());
}

// =============================================================================
// FORCE TEST AND ENRICHMENT
// =============================================================================

#[test]
fn test_force_test_message_goes_first() {
    let mut config = config();
    config.force_test = true;
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[1]));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    let posts = webhook.posts();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0], TEST_MESSAGE);
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn test_failed_test_message_does_not_stop_run() {
    let mut config = config();
    config.force_test = true;
    let fetcher = MockFetcher::new().with_page(LIST_URL, &table_listing(&[1]));
    let webhook = ScriptedWebhook::new().respond(403, "forbidden");
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();
    assert_eq!(summary.delivered(), 1);
}

#[test]
fn test_untitled_notices_read_detail_pages() {
    let config = config();
    let fetcher = MockFetcher::new()
        .with_page(LIST_URL, ONCLICK_PAGE)
        .with_page(&detail_url(900_002), &detail_page("기숙사 입사 안내"));
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    let summary = run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(summary.delivered(), 3);
    let enriched = summary
        .records
        .iter()
        .find(|r| r.notice.identifier == "articleNo:900002")
        .unwrap();
    assert_eq!(enriched.notice.title, "기숙사 입사 안내");
    // Titled notices never trigger a detail fetch
    assert_eq!(fetcher.requests(), vec![LIST_URL.to_string(), detail_url(900_002)]);
}

#[test]
fn test_seen_untitled_notices_are_not_fetched() {
    let config = config();
    let fetcher = MockFetcher::new().with_page(LIST_URL, ONCLICK_PAGE);
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::with_ids(&["articleNo:900002"]);
    let sleeper = RecordingSleeper::new();

    run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert_eq!(fetcher.requests(), vec![LIST_URL.to_string()]);
}

#[test]
fn test_enrichment_disabled_uses_placeholder() {
    let mut config = config();
    config.enrich_details = false;
    let fetcher = MockFetcher::new().with_page(LIST_URL, ONCLICK_PAGE);
    let webhook = ScriptedWebhook::new();
    let store = MemorySeenStore::new();
    let sleeper = RecordingSleeper::new();

    run(&config, &fetcher, &webhook, &store, &sleeper).unwrap();

    assert!(webhook.posts().iter().any(|m| m.contains("**제목**: articleNo 900002")));
}
