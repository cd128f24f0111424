//! Static lookup tables mapping raw survey answers to canonical tag values.
//!
//! Each table maps the exact trimmed source string to its canonical label.
//! Unmapped inputs pass through unchanged (identity fallback) - the tables
//! only rewrite answers they know about, they never reject.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical title assigned to student respondents.
pub const STUDENT_TITLE: &str = "仍在學：學生";

/// Canonical seniority forced onto rows whose title resolved to
/// [`STUDENT_TITLE`], overriding whatever the seniority answer mapped to.
pub const STUDENT_SENIORITY: &str = "年資：我還是學生";

/// Display name given to every companion-list contact.
pub const COMPANION_NAME: &str = "數創夥伴";

/// Job title -> canonical title tag.
pub static TITLE_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "企業高階主管 Founder/ Executives",
            "高層/ 策略決策者：創辦人/ 高階主管",
        ),
        ("其他團隊主管 Other Team Lead", "管理/策略職：其他團隊主管"),
        ("其他 Others", "其他職能：其他"),
        (
            "專案經理 Project Manager",
            "管理/策略職：專案經理 Project Manager",
        ),
        (
            "產品經理 Product Manager",
            "管理/策略職：產品經理 Product Manager",
        ),
        (
            "軟體工程師 Software Engineer",
            "技術職：軟體工程師 Software Engineer",
        ),
        (
            "資料工程師 Data Engineer",
            "技術職：資料工程師 Data Engineer",
        ),
        (
            "資料科學家 Data Scientist",
            "技術職：資料科學家 Data Scientist",
        ),
        ("數據分析師 Data Analyst", "技術職：資料分析師 Data Analyst"),
        (
            "數據/AI團隊主管 Data Team Lead",
            "管理/策略職：數據/ AI團隊主管",
        ),
        ("學生 Student", STUDENT_TITLE),
    ])
});

/// Overall work seniority -> canonical seniority tag.
pub static SENIORITY_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("<=2年", "年資：0 - 2年（剛入行/ 新鮮人）"),
        ("2~5年", "年資：2 - 5年（穩定工作中）"),
        ("5~10年", "年資：5 - 10年（中階實務經驗）"),
        ("10年以上", "年資：10 年以上（資深或主管）"),
    ])
});

/// Prior attendance count -> canonical frequency tag.
///
/// "1次" maps to the "2 次" label on purpose: the tag counts the event
/// being imported, so one prior visit means attending for the second time.
pub static FREQ_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("從未參加過", "參與頻率：首次參加"),
        ("1次", "參與頻率：參加 2 次"),
        ("2次以上", "參與頻率：3 次(含) 以上"),
    ])
});

/// Remap a trimmed raw value through a lookup table, falling back to the
/// input itself when the table has no entry for it.
pub fn remap<'a>(table: &HashMap<&'static str, &'static str>, raw: &'a str) -> &'a str {
    table.get(raw).copied().unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_title_is_rewritten() {
        assert_eq!(remap(&TITLE_MAP, "學生 Student"), STUDENT_TITLE);
        assert_eq!(
            remap(&TITLE_MAP, "資料科學家 Data Scientist"),
            "技術職：資料科學家 Data Scientist"
        );
    }

    #[test]
    fn unknown_value_passes_through() {
        assert_eq!(remap(&TITLE_MAP, "自由工作者"), "自由工作者");
        assert_eq!(remap(&SENIORITY_MAP, ""), "");
        assert_eq!(remap(&FREQ_MAP, "3次"), "3次");
    }

    #[test]
    fn frequency_off_by_one_label_is_preserved() {
        assert_eq!(remap(&FREQ_MAP, "1次"), "參與頻率：參加 2 次");
    }

    #[test]
    fn seniority_map_covers_all_survey_choices() {
        for raw in ["<=2年", "2~5年", "5~10年", "10年以上"] {
            assert_ne!(remap(&SENIORITY_MAP, raw), raw);
        }
    }
}
