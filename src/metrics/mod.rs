mod summary;
mod types;


pub use summary::{MetricsSummary, summary_lines};
pub use types::{Outcome, ResultSet};
