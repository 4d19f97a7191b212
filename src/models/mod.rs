pub mod bid;
pub mod comparison;
pub mod line_item;

pub use bid::{Bid, BidSummary, RawBid, Shipper};
pub use comparison::{
    BidComparison, ComparisonEntry, ComparisonRow, DisplayRow, ReconcileOptions,
};
pub use line_item::{DescriptionField, NormalizedLineItem, RawLineItem};
