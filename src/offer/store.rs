//! Insertion-ordered record store keyed by condition label

use super::{Condition, OfferRecord};
use std::collections::HashMap;

/// Handle to a record inside a `RecordStore`
///
/// Slots are only handed out by [`RecordStore::open`], so a slot always
/// refers to an existing record of the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSlot(usize);

/// Offer records of one parse, in first-seen order of their conditions
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<OfferRecord>,
    by_condition: HashMap<String, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for a condition, creating an empty record if the
    /// condition has not been seen yet
    ///
    /// Records are identified by label alone: a used grade spelled like the
    /// new label ("Used – New") reopens the existing record, which keeps the
    /// kind it was created with. The boolean is true when a record was created.
    pub fn open(&mut self, condition: &Condition) -> (RecordSlot, bool) {
        if let Some(&index) = self.by_condition.get(&condition.label) {
            return (RecordSlot(index), false);
        }

        let index = self.records.len();
        self.records.push(OfferRecord::new(condition));
        self.by_condition.insert(condition.label.clone(), index);
        (RecordSlot(index), true)
    }

    pub fn record(&self, slot: RecordSlot) -> &OfferRecord {
        &self.records[slot.0]
    }

    pub fn record_mut(&mut self, slot: RecordSlot) -> &mut OfferRecord {
        &mut self.records[slot.0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freezes the store into its ordered record list
    pub fn into_records(self) -> Vec<OfferRecord> {
        self.records
    }
}
