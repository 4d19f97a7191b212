pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use error::{CompareError, CompareResult};
pub use models::{Bid, BidComparison, BidSummary, DisplayRow, RawBid, ReconcileOptions};
pub use service::{compare, rank_bids, reconcile, summarize, ComparisonService};
