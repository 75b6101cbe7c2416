//! Message formatting for the chat webhook

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::core::models::NoticeCandidate;

/// Tag used when no category rule matches
pub const DEFAULT_CATEGORY: &str = "[공지]";

/// Shown in place of an unknown posting date
pub const MISSING_DATE: &str = "미표기";

/// Posted when a manual test message is requested
pub const TEST_MESSAGE: &str = "\u{2705} **noticewatch 테스트 메시지**\n웹훅 연결이 정상입니다.";

/// Ordered keyword-to-tag rules; the first match wins
const CATEGORY_RULES: [(&str, &str); 5] = [
    ("[장학]", "장학|scholar"),
    ("[학사]", "수강|휴학|복학|등록|학점|성적|졸업|학사|수업"),
    ("[채용]", "채용|인턴|모집"),
    ("[행사]", "행사|설명회|세미나|특강|박람회"),
    ("[공모전]", "공모전|대회|콘테스트|챌린지"),
];

static CATEGORIES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CATEGORY_RULES
        .iter()
        .filter_map(|&(tag, pattern)| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|re| (tag, re))
        })
        .collect()
});

/// Guess a category tag from a title
#[must_use]
pub fn guess_category(title: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(_, re)| re.is_match(title))
        .map_or(DEFAULT_CATEGORY, |&(tag, _)| tag)
}

/// Render the message posted for a notice
#[must_use]
pub fn format_notice(notice: &NoticeCandidate) -> String {
    let date = if notice.posted_date.is_empty() {
        MISSING_DATE
    } else {
        notice.posted_date.as_str()
    };
    format!(
        "\u{1F4E2} **새 공지** {}\n**제목**: {}\n**게시일**: {}\n\u{1F517} {}",
        guess_category(&notice.title),
        notice.title,
        date,
        notice.url
    )
}
