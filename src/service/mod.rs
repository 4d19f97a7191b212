pub mod aggregator;
pub mod filter;
pub mod grouping;
pub mod key;
pub mod matrix;
pub mod normalizer;
pub mod reconciler;

pub use aggregator::{derived_bid_total, rank_bids, summarize};
pub use reconciler::{compare, reconcile, ComparisonService};
