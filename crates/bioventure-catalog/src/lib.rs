//! bioventure-catalog: the static opportunity catalog.
//! Provides:
//!   - the immutable opportunity table
//!   - sector filtering and the memoised market view
//!   - chart adapters (scatter points, market projection series)

pub mod catalog;
pub mod filter;
pub mod charts;

pub use catalog::catalog;
pub use filter::{filter_opportunities, sector_counts, MarketView, SectorFilter};
