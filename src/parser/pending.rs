use crate::classify::ContinuationField;

/// Continuation fields waiting for their value fragment
///
/// Both flags can be raised at once; each pending field consumes one
/// following fragment, ship-from first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingFields {
    ship_from: bool,
    sold_by: bool,
}

impl PendingFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ContinuationField) {
        *self.flag_mut(field) = true;
    }

    pub fn contains(&self, field: ContinuationField) -> bool {
        match field {
            ContinuationField::ShipFrom => self.ship_from,
            ContinuationField::SoldBy => self.sold_by,
        }
    }

    /// Clears and returns the next field to resolve, if any
    pub fn take_next(&mut self) -> Option<ContinuationField> {
        let field = ContinuationField::ALL
            .into_iter()
            .find(|field| self.contains(*field))?;
        *self.flag_mut(field) = false;
        Some(field)
    }

    pub fn len(&self) -> usize {
        usize::from(self.ship_from) + usize::from(self.sold_by)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn flag_mut(&mut self, field: ContinuationField) -> &mut bool {
        match field {
            ContinuationField::ShipFrom => &mut self.ship_from,
            ContinuationField::SoldBy => &mut self.sold_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_next_resolves_ship_from_first() {
        let mut pending = PendingFields::new();
        pending.insert(ContinuationField::SoldBy);
        pending.insert(ContinuationField::ShipFrom);
        assert_eq!(pending.len(), 2);

        assert_eq!(pending.take_next(), Some(ContinuationField::ShipFrom));
        assert_eq!(pending.take_next(), Some(ContinuationField::SoldBy));
        assert_eq!(pending.take_next(), None);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut pending = PendingFields::new();
        pending.insert(ContinuationField::SoldBy);
        pending.insert(ContinuationField::SoldBy);
        assert_eq!(pending.len(), 1);
        assert!(pending.contains(ContinuationField::SoldBy));
        assert!(!pending.contains(ContinuationField::ShipFrom));
    }
}
