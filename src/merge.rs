//! Positional merge of static card slots with fetched field records.
//!
//! The contact page renders a fixed row of cards. Each card starts from
//! static localized defaults (a `Slot`) and, when the `fields/` endpoint has
//! a record at the same position, the record's localized `title` and `value`
//! overlay the slot's description and contact text. The layout is bounded by
//! the slot count: however many records the backend returns, the output row
//! has exactly as many cards as there are slots.

use crate::i18n::{strings_for, Locale};
use crate::record::LocalizedRecord;

/// A fixed-position card placeholder with static fallback content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Icon name in the site's icon set, carried through untouched
    pub icon: String,
    pub title: String,
    pub description: String,
    pub contact: String,
    pub action: String,
}

/// A slot overlaid with resolved dynamic text, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub contact: String,
    pub action: String,
}

/// The four contact card slots with their static defaults for a locale.
pub fn default_contact_slots(locale: Locale) -> Vec<Slot> {
    strings_for(locale)
        .contact_cards
        .iter()
        .map(|card| Slot {
            icon: card.icon.to_string(),
            title: card.title.to_string(),
            description: card.description.to_string(),
            contact: card.contact.to_string(),
            action: card.action.to_string(),
        })
        .collect()
}

/// Merge slots with positionally-corresponding records.
///
/// For each slot index, the record at the same index (if any) contributes
/// its resolved `title` as the card description and its resolved `value` as
/// the card contact and action. Resolved text wins over the static default
/// only when it is non-empty; a short or empty record list leaves the
/// remaining slots untouched. Pure function of its inputs: same slots,
/// records and locale always produce the same cards.
pub fn merge_slots(slots: &[Slot], records: &[LocalizedRecord], locale: Locale) -> Vec<MergedCard> {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let record = records.get(index);

            let description = record
                .and_then(|rec| rec.resolve(locale, "title"))
                .filter(|text| !text.is_empty())
                .unwrap_or(&slot.description);
            let contact = record
                .and_then(|rec| rec.resolve(locale, "value"))
                .filter(|text| !text.is_empty())
                .unwrap_or(&slot.contact);
            let action = record
                .and_then(|rec| rec.resolve(locale, "value"))
                .filter(|text| !text.is_empty())
                .unwrap_or(&slot.action);

            MergedCard {
                icon: slot.icon.clone(),
                title: slot.title.clone(),
                description: description.to_string(),
                contact: contact.to_string(),
                action: action.to_string(),
            }
        })
        .collect()
}
