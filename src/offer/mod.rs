//! Offer records produced by the parser
//!
//! One `OfferRecord` exists per distinct product condition seen in a buybox.
//! Records have a fixed shape: single-assignment fields keep their first
//! value, delivery options accumulate in encounter order.

mod store;

pub use store::{RecordSlot, RecordStore};

use serde::Serialize;
use std::fmt;

/// Stock status of an offer whose stock note was never seen
pub const STOCK_NOT_PARSED: &str = "NOT_PARSED";

/// Kind of product condition an offer is sold in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    New,
    /// Used, with a grade carried in the condition label
    Used,
}

impl ConditionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Used => "used",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A condition announced by a fragment
///
/// `label` is what identifies the record: the locale's new label, or the
/// grade of a used offer (e.g., "Very good").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub kind: ConditionKind,
    pub label: String,
}

impl Condition {
    pub fn new_offer(label: impl Into<String>) -> Self {
        Self {
            kind: ConditionKind::New,
            label: label.into(),
        }
    }

    pub fn used(grade: impl Into<String>) -> Self {
        Self {
            kind: ConditionKind::Used,
            label: grade.into(),
        }
    }
}

/// Delivery speed / pricing class of a delivery promise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeliveryType {
    Free,
    Expedited,
    Standard,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Expedited => "Expedited",
            Self::Standard => "Standard",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One delivery promise of an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryOption {
    #[serde(rename = "type")]
    pub kind: DeliveryType,

    /// Delivery estimate, e.g. "12 January"
    pub eta: String,
}

impl DeliveryOption {
    pub fn new(kind: DeliveryType, eta: impl Into<String>) -> Self {
        Self {
            kind,
            eta: eta.into(),
        }
    }
}

/// Everything known about the offer for one condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferRecord {
    pub condition: String,
    pub condition_kind: ConditionKind,
    pub price: Option<String>,
    pub delivery_options: Vec<DeliveryOption>,
    pub return_policy: Option<bool>,
    pub ship_from: Option<String>,
    pub sold_by: Option<String>,
    pub stock_status: String,
}

impl OfferRecord {
    /// Creates an empty record for a newly announced condition
    pub fn new(condition: &Condition) -> Self {
        Self {
            condition: condition.label.clone(),
            condition_kind: condition.kind,
            price: None,
            delivery_options: Vec::new(),
            return_policy: None,
            ship_from: None,
            sold_by: None,
            stock_status: STOCK_NOT_PARSED.to_string(),
        }
    }

    /// Sets the price unless one is already recorded
    ///
    /// Returns true if the value was written.
    pub fn set_price(&mut self, price: String) -> bool {
        set_once(&mut self.price, price)
    }

    /// Sets the shipper unless one is already recorded
    pub fn set_ship_from(&mut self, ship_from: String) -> bool {
        set_once(&mut self.ship_from, ship_from)
    }

    /// Sets the seller unless one is already recorded
    pub fn set_sold_by(&mut self, sold_by: String) -> bool {
        set_once(&mut self.sold_by, sold_by)
    }

    /// Appends a delivery option; duplicates are kept
    pub fn add_delivery_option(&mut self, option: DeliveryOption) {
        self.delivery_options.push(option);
    }

    pub fn mark_free_returns(&mut self) {
        self.return_policy = Some(true);
    }

    pub fn mark_in_stock(&mut self, label: &str) {
        self.stock_status = label.to_string();
    }

    /// Returns true if the stock note was seen for this offer
    pub fn stock_parsed(&self) -> bool {
        self.stock_status != STOCK_NOT_PARSED
    }
}

fn set_once(slot: &mut Option<String>, value: String) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}
