//! Lawsuit records extracted from the portal's case page.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Party;

/// Case number with its separators stripped (digits only).
pub type LawsuitNumber = String;

/// A lawsuit as rendered on its case page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LawsuitRecord {
    pub number: LawsuitNumber,

    /// Date the case was filed ("autuação").
    pub filing_date: NaiveDate,

    pub situation: String,

    pub court: String,

    pub judge: String,

    pub competence: String,

    pub action_class: String,

    pub authors: Vec<Party>,

    /// Inline defendant first, then the one loaded from hidden parties, if any.
    pub defendants: Vec<Party>,

    /// Events in page order, which is the portal's chronological order.
    pub events: Vec<LawsuitEvent>,
}

/// One entry of a lawsuit's event history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LawsuitEvent {
    /// Portal-local date and time (minute precision).
    pub date: NaiveDateTime,

    pub description: String,

    /// Number of the lawsuit this event belongs to.
    pub lawsuit_number: LawsuitNumber,

    /// Always empty: document links are not extracted.
    pub documents: Vec<String>,
}
