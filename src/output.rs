//! Human-readable run report
//!
//! Diagnostics go to the log; this is the short summary printed on stdout
//! at the end of a pass.

use crate::core::models::DeliveryOutcome;
use crate::pipeline::RunSummary;

impl RunSummary {
    /// Print the summary to stdout
    pub fn render(&self) {
        print!("{}", self.report());
    }

    /// The summary as text
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        let strategy = self
            .strategy
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        out.push_str(&format!(
            "Listing: {} notice(s) via {strategy}\n",
            self.discovered
        ));

        if self.records.is_empty() {
            out.push_str("No new notices.\n");
            return out;
        }

        for record in &self.records {
            match &record.outcome {
                DeliveryOutcome::Delivered => {
                    out.push_str(&format!("  sent    [{}] {}\n", record.notice.identifier, record.notice.title));
                },
                DeliveryOutcome::Failed(reason) => {
                    out.push_str(&format!(
                        "  FAILED  [{}] {}\n          {reason}\n",
                        record.notice.identifier, record.notice.title
                    ));
                },
            }
        }
        out.push_str(&format!(
            "Sent {} of {} selected notice(s)",
            self.delivered(),
            self.selected
        ));
        if self.failed() > 0 {
            out.push_str(&format!(", {} will be retried next run", self.failed()));
        }
        out.push_str(&format!(". Seen-set holds {} id(s).\n", self.seen_total));
        out
    }
}
