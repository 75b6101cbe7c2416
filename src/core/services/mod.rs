//! Business logic services
//!
//! Pure logic over domain models. Anything that needs the network goes
//! through a port trait passed in by the caller.
//!
//! - [`identity`] - Stable identifiers from detail URLs
//! - [`listing`] - Strategy cascade over listing HTML
//! - [`detail`] - Title extraction from detail pages
//! - [`enrich`] - Detail-page title fan-out for untitled candidates
//! - [`gate`] - Seen/keyword filtering, batch cap, delivery order
//! - [`message`] - Webhook message template
//! - [`notifier`] - Posting with rate-limit retry

pub mod detail;
pub mod enrich;
pub mod gate;
pub mod identity;
pub mod listing;
pub mod message;
pub mod notifier;

pub use detail::extract_detail_title;
pub use enrich::{enrich_titles, fill_placeholders};
pub use gate::{KeywordFilter, select};
pub use identity::identify;
pub use listing::{Listing, Strategy, parse_list, parse_listing};
pub use message::{format_notice, guess_category};
pub use notifier::Notifier;
