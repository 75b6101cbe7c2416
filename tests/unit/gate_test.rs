//! Tests for the delivery gate

use noticewatch::core::models::{NoticeCandidate, SeenSet};
use noticewatch::core::services::{KeywordFilter, select};

fn notice(n: u32, title: &str) -> NoticeCandidate {
    NoticeCandidate::new(
        format!("articleNo:{n}"),
        title,
        format!("https://www.smu.ac.kr/kor/life/notice.do?mode=view&articleNo={n}"),
        "",
    )
}

fn ids(batch: &[NoticeCandidate]) -> Vec<&str> {
    batch.iter().map(|c| c.identifier.as_str()).collect()
}

#[test]
fn test_oldest_first() {
    let batch = select(
        vec![notice(3, "c"), notice(2, "b"), notice(1, "a")],
        &SeenSet::new(),
        &KeywordFilter::allow_all(),
        10,
    );
    assert_eq!(ids(&batch), vec!["articleNo:1", "articleNo:2", "articleNo:3"]);
}

#[test]
fn test_cap_drops_oldest_overflow() {
    let candidates: Vec<_> = (1..=15).rev().map(|n| notice(n, "t")).collect();
    let batch = select(candidates, &SeenSet::new(), &KeywordFilter::allow_all(), 10);

    assert_eq!(batch.len(), 10);
    assert_eq!(batch.first().unwrap().identifier, "articleNo:6");
    assert_eq!(batch.last().unwrap().identifier, "articleNo:15");
}

#[test]
fn test_everything_seen() {
    let seen: SeenSet = ["articleNo:1", "articleNo:2"].into_iter().collect();
    let batch = select(
        vec![notice(2, "b"), notice(1, "a")],
        &seen,
        &KeywordFilter::allow_all(),
        10,
    );
    assert!(batch.is_empty());
}

#[test]
fn test_zero_cap() {
    let batch = select(vec![notice(1, "a")], &SeenSet::new(), &KeywordFilter::allow_all(), 0);
    assert!(batch.is_empty());
}

#[test]
fn test_keyword_regex_syntax() {
    let keywords = KeywordFilter::new(&["수강|휴학"]).unwrap();
    let batch = select(
        vec![notice(3, "휴학 신청"), notice(2, "Library hours"), notice(1, "수강 정정")],
        &SeenSet::new(),
        &keywords,
        10,
    );
    assert_eq!(ids(&batch), vec!["articleNo:1", "articleNo:3"]);
}
