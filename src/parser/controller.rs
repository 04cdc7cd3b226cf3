//! Fragment-stream state machine
//!
//! The controller walks the stream once. Its state is the current condition
//! (which record receives field writes) and the set of continuation fields
//! waiting for their value fragment.
//!
//! # Dispatch order
//!
//! For each fragment:
//! 1. A pending continuation consumes the fragment as its value.
//! 2. A condition marker switches the current condition.
//! 3. A price is recorded (first price wins) and dispatch continues.
//! 4. Free returns, else a delivery promise, else ships-from / sold-by
//!    markers, else the in-stock note.

use crate::classify::{
    announced_continuations, classify_condition, classify_delivery, classify_price,
    is_free_returns, is_in_stock, ContinuationField,
};
use crate::config::{Config, LocaleConfig, OrphanPolicy};
use crate::fragment::Fragment;
use crate::offer::{DeliveryOption, OfferRecord, RecordSlot, RecordStore};
use crate::parser::pending::PendingFields;
use crate::parser::stats::ParseStats;
use crate::{ParseError, ParseResult};

/// Non-condition content found in a fragment, after the price
#[derive(Debug)]
enum Content {
    FreeReturns,
    Delivery(DeliveryOption),
    Continuations(Vec<ContinuationField>),
    InStock,
    Nothing,
}

/// Single-pass parser over one buybox fragment stream
#[derive(Debug)]
pub struct Controller<'a> {
    locale: &'a LocaleConfig,
    orphan_policy: OrphanPolicy,
    store: RecordStore,
    current: Option<RecordSlot>,
    pending: PendingFields,
    stats: ParseStats,
}

impl<'a> Controller<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_locale(&config.locale, config.parser.orphan_policy)
    }

    pub fn with_locale(locale: &'a LocaleConfig, orphan_policy: OrphanPolicy) -> Self {
        Self {
            locale,
            orphan_policy,
            store: RecordStore::new(),
            current: None,
            pending: PendingFields::new(),
            stats: ParseStats::default(),
        }
    }

    /// Condition label of the record currently receiving writes
    pub fn current_condition(&self) -> Option<&str> {
        self.current
            .map(|slot| self.store.record(slot).condition.as_str())
    }

    pub fn pending(&self) -> PendingFields {
        self.pending
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Feeds the next fragment of the stream
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoActiveCondition`] when the fragment carries
    /// offer data before any condition was announced and the orphan policy
    /// is `Reject`.
    pub fn feed(&mut self, fragment: &Fragment) -> ParseResult<()> {
        let index = self.stats.fragments as usize;
        self.stats.fragments += 1;

        let locale = self.locale;
        let text = fragment.normalized_text(locale);

        if let Some(field) = self.pending.take_next() {
            if let Some(slot) = self.active_slot(index, fragment, &text)? {
                let record = self.store.record_mut(slot);
                let written = match field {
                    ContinuationField::ShipFrom => record.set_ship_from(text.clone()),
                    ContinuationField::SoldBy => record.set_sold_by(text.clone()),
                };
                self.stats.continuation_values += 1;
                tracing::debug!(
                    "#{} {}: {} = {:?}{}",
                    index,
                    fragment.label,
                    field.as_str(),
                    text,
                    if written { "" } else { " (already set, ignored)" }
                );
            }
            return Ok(());
        }

        if let Some(condition) = classify_condition(&text, locale) {
            let (slot, created) = self.store.open(&condition);
            self.current = Some(slot);
            self.stats.conditions += 1;
            tracing::debug!(
                "#{} {}: condition {:?} ({}{})",
                index,
                fragment.label,
                condition.label,
                condition.kind,
                if created { ", new record" } else { "" }
            );
            return Ok(());
        }

        let price = classify_price(&text, locale);
        let content = classify_content(&text, locale);

        if price.is_none() && matches!(content, Content::Nothing) {
            self.stats.unrecognized += 1;
            tracing::trace!("#{} {}: unrecognized {:?}", index, fragment.label, text);
            return Ok(());
        }

        let Some(slot) = self.active_slot(index, fragment, &text)? else {
            return Ok(());
        };
        let record = self.store.record_mut(slot);

        if let Some(price) = price {
            if record.set_price(price) {
                self.stats.prices += 1;
                tracing::debug!("#{} {}: price {:?}", index, fragment.label, record.price);
            } else {
                self.stats.duplicate_prices += 1;
                tracing::trace!("#{} {}: price already set, ignored", index, fragment.label);
            }
        }

        match content {
            Content::FreeReturns => {
                record.mark_free_returns();
                self.stats.return_policies += 1;
                tracing::debug!("#{} {}: free returns", index, fragment.label);
            }
            Content::Delivery(option) => {
                tracing::debug!(
                    "#{} {}: {} delivery, eta {:?}",
                    index,
                    fragment.label,
                    option.kind,
                    option.eta
                );
                record.add_delivery_option(option);
                self.stats.delivery_options += 1;
            }
            Content::Continuations(fields) => {
                for field in fields {
                    self.pending.insert(field);
                    self.stats.continuation_markers += 1;
                    tracing::debug!("#{} {}: expecting {}", index, fragment.label, field.as_str());
                }
            }
            Content::InStock => {
                record.mark_in_stock(&locale.in_stock_label);
                self.stats.stock_notes += 1;
                tracing::debug!("#{} {}: in stock", index, fragment.label);
            }
            Content::Nothing => {}
        }

        Ok(())
    }

    /// Ends the stream and returns the records in first-seen order
    ///
    /// Continuations still waiting for a value are discarded.
    pub fn finish(mut self) -> (Vec<OfferRecord>, ParseStats) {
        let pending = self.pending();
        if !pending.is_empty() {
            tracing::debug!(
                "Discarding {} unresolved continuation(s) for {:?} at end of stream",
                pending.len(),
                self.current_condition().unwrap_or("no condition")
            );
            self.stats.pending_discarded += pending.len() as u64;
        }

        if self.store.is_empty() {
            tracing::debug!("No condition marker in {} fragments", self.stats.fragments);
        } else {
            tracing::debug!("Stream ended with {} offer record(s)", self.store.len());
        }

        (self.store.into_records(), self.stats)
    }

    /// Returns the slot that receives writes for a field-bearing fragment
    ///
    /// With no current condition this either fails or, under the `Skip`
    /// policy, drops the fragment.
    fn active_slot(
        &mut self,
        index: usize,
        fragment: &Fragment,
        text: &str,
    ) -> ParseResult<Option<RecordSlot>> {
        if let Some(slot) = self.current {
            return Ok(Some(slot));
        }

        match self.orphan_policy {
            OrphanPolicy::Reject => Err(ParseError::NoActiveCondition {
                index,
                label: fragment.label.clone(),
                text: text.to_string(),
            }),
            OrphanPolicy::Skip => {
                self.stats.orphans_skipped += 1;
                tracing::warn!(
                    "Skipping fragment #{} ({}) before any condition: {:?}",
                    index,
                    fragment.label,
                    text
                );
                Ok(None)
            }
        }
    }
}

/// Classifies everything after the price, first match wins
fn classify_content(text: &str, locale: &LocaleConfig) -> Content {
    if is_free_returns(text, locale) {
        return Content::FreeReturns;
    }

    if let Some(option) = classify_delivery(text, locale) {
        return Content::Delivery(option);
    }

    let fields = announced_continuations(text, locale);
    if !fields.is_empty() {
        return Content::Continuations(fields);
    }

    if is_in_stock(text, locale) {
        return Content::InStock;
    }

    Content::Nothing
}
