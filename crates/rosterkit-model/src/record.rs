//! Row types flowing through the conversion.

use serde::{Deserialize, Serialize};

use crate::columns;

/// One registration row projected onto the seven source columns.
///
/// Values are kept verbatim as read from the export; columns missing from
/// the input are synthesized as empty strings rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRow {
    pub purchaser_name: String,
    pub purchaser_email: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub title: String,
    pub seniority: String,
    pub frequency: String,
}

/// One row of the primary (CRM-import) output.
///
/// Serialization order is the output column order: the seven source
/// columns verbatim, then the derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitRow {
    #[serde(rename = "訂購人姓名")]
    pub purchaser_name: String,
    #[serde(rename = "訂購人Email")]
    pub purchaser_email: String,
    #[serde(rename = "參加人姓名")]
    pub attendee_name: String,
    #[serde(rename = "參加人Email")]
    pub attendee_email: String,
    #[serde(rename = "最接近您工作內容的職稱")]
    pub title: String,
    #[serde(rename = "請問您的「整體」工作年資為?")]
    pub seniority: String,
    #[serde(rename = "已參加數創小聚次數")]
    pub frequency: String,
    #[serde(rename = "最接近您工作內容的職稱_new")]
    pub title_new: String,
    #[serde(rename = "請問您的「整體」工作年資為_new")]
    pub seniority_new: String,
    #[serde(rename = "已參加數創小聚次數_new")]
    pub frequency_new: String,
    #[serde(rename = "活動屬性")]
    pub activity: String,
    #[serde(rename = "tag")]
    pub tag: String,
    /// 1 when purchaser and attendee names are non-empty and equal.
    #[serde(rename = "姓名比較")]
    pub name_eq: u8,
    /// 1 when purchaser and attendee emails are non-empty and equal.
    #[serde(rename = "Email比較")]
    pub email_eq: u8,
    #[serde(rename = "姓名_Email比較")]
    pub name_email_label: String,
}

/// One row of the companion ("plus-one") output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionRow {
    /// Companion email, trimmed and lower-cased.
    pub group_ticket_email: String,
    /// Fixed display name for imported companions.
    pub name: String,
    /// Activity label applied to the whole run.
    pub tags: String,
}

/// Header row of the companion output, used when no usable rows remain.
pub const COMPANION_HEADERS: [&str; 3] = ["group_ticket_email", "name", "tags"];

impl RegistrationRow {
    /// Build from a column-lookup closure, defaulting absent columns to
    /// empty strings.
    pub fn from_lookup<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut field = |name: &str| get(name).unwrap_or_default();
        Self {
            purchaser_name: field(columns::PURCHASER_NAME),
            purchaser_email: field(columns::PURCHASER_EMAIL),
            attendee_name: field(columns::ATTENDEE_NAME),
            attendee_email: field(columns::ATTENDEE_EMAIL),
            title: field(columns::TITLE),
            seniority: field(columns::SENIORITY),
            frequency: field(columns::FREQUENCY),
        }
    }
}
