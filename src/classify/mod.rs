//! Field classifiers
//!
//! Each classifier looks at the normalised text of a single fragment and
//! decides whether it is one kind of buybox content:
//! - condition markers (new, used with a grade)
//! - two-line prices
//! - delivery promises with their ETA
//! - free-returns, in-stock, ships-from and sold-by markers
//!
//! Classifiers are stateless and total: any text either matches or yields
//! "no match". Which classifier wins for a given fragment is decided by the
//! parser controller.

mod condition;
mod delivery;
mod markers;
mod price;

pub use condition::classify_condition;
pub use delivery::{classify_delivery, delivery_type, extract_eta, ETA_NOT_FOUND};
pub use markers::{announced_continuations, is_free_returns, is_in_stock, ContinuationField};
pub use price::classify_price;
