use crate::config::LocaleConfig;

/// A field whose value is carried by the fragment after its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuationField {
    /// "Dispatched" / "Expédié": next fragment names the shipper
    ShipFrom,
    /// "Sold by" / "Vendu par": next fragment names the seller
    SoldBy,
}

impl ContinuationField {
    /// Resolution order when several fields are pending
    pub const ALL: [ContinuationField; 2] = [Self::ShipFrom, Self::SoldBy];

    pub fn marker<'a>(&self, locale: &'a LocaleConfig) -> &'a str {
        match self {
            Self::ShipFrom => &locale.ship_from_marker,
            Self::SoldBy => &locale.sold_by_marker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShipFrom => "ship_from",
            Self::SoldBy => "sold_by",
        }
    }
}

/// Returns the continuation fields announced by a fragment, in resolution order
pub fn announced_continuations(text: &str, locale: &LocaleConfig) -> Vec<ContinuationField> {
    ContinuationField::ALL
        .into_iter()
        .filter(|field| text.contains(field.marker(locale)))
        .collect()
}

pub fn is_free_returns(text: &str, locale: &LocaleConfig) -> bool {
    text.contains(locale.returns_marker.as_str())
}

pub fn is_in_stock(text: &str, locale: &LocaleConfig) -> bool {
    text.contains(locale.in_stock_marker.as_str())
}
