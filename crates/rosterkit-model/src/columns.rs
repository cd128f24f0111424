//! Column names of the registration export.
//!
//! The export uses the survey questions verbatim as headers, so these are
//! the literal Chinese strings. Output headers for the derived fields keep
//! the source header with a `_new` suffix (dropping trailing punctuation
//! where the original export does).

/// Purchaser display name.
pub const PURCHASER_NAME: &str = "訂購人姓名";
/// Purchaser email address.
pub const PURCHASER_EMAIL: &str = "訂購人Email";
/// Attendee display name.
pub const ATTENDEE_NAME: &str = "參加人姓名";
/// Attendee email address.
pub const ATTENDEE_EMAIL: &str = "參加人Email";
/// Job-title survey answer (free text).
pub const TITLE: &str = "最接近您工作內容的職稱";
/// Seniority survey answer (free text).
pub const SENIORITY: &str = "請問您的「整體」工作年資為?";
/// Prior-attendance-count survey answer (free text).
pub const FREQUENCY: &str = "已參加數創小聚次數";

/// Second-person email captured on two-person group tickets.
/// The header carries a full-width question mark in the export.
pub const GROUP_EMAIL: &str = "若為購買兩人同行票，請問第二人的email為？";

/// The seven source columns, in the order they appear in the primary output.
pub const SOURCE_COLUMNS: [&str; 7] = [
    PURCHASER_NAME,
    PURCHASER_EMAIL,
    ATTENDEE_NAME,
    ATTENDEE_EMAIL,
    TITLE,
    SENIORITY,
    FREQUENCY,
];

/// Derived-column headers on the primary output.
pub const TITLE_NEW: &str = "最接近您工作內容的職稱_new";
pub const SENIORITY_NEW: &str = "請問您的「整體」工作年資為_new";
pub const FREQUENCY_NEW: &str = "已參加數創小聚次數_new";
pub const ACTIVITY: &str = "活動屬性";
pub const TAG: &str = "tag";
pub const NAME_EQ: &str = "姓名比較";
pub const EMAIL_EQ: &str = "Email比較";
pub const NAME_EMAIL_LABEL: &str = "姓名_Email比較";

/// Header row of the primary output, in column order. Used when a run
/// produced no rows, so the output still carries the fixed header.
pub const KIT_HEADERS: [&str; 15] = [
    PURCHASER_NAME,
    PURCHASER_EMAIL,
    ATTENDEE_NAME,
    ATTENDEE_EMAIL,
    TITLE,
    SENIORITY,
    FREQUENCY,
    TITLE_NEW,
    SENIORITY_NEW,
    FREQUENCY_NEW,
    ACTIVITY,
    TAG,
    NAME_EQ,
    EMAIL_EQ,
    NAME_EMAIL_LABEL,
];
