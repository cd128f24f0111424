//! Primary conversion: registration rows to tag-annotated CRM rows.

use rosterkit_model::{
    FREQ_MAP, IdentityMatch, KitRow, RegistrationRow, SENIORITY_MAP, STUDENT_SENIORITY,
    STUDENT_TITLE, TITLE_MAP, columns, equal_nonempty, norm_email, norm_name, norm_str, remap,
};

use rosterkit_ingest::RawTable;

use crate::tag::build_tag;

/// Project every row of the raw table onto the seven source columns and
/// derive the CRM-import fields. Missing source columns become empty
/// strings; the table itself is never rejected for shape.
pub fn convert_rows(table: &RawTable, activity: &str) -> Vec<KitRow> {
    for column in columns::SOURCE_COLUMNS {
        if !table.has_column(column) {
            tracing::debug!(column, "source column missing, defaulting to empty");
        }
    }
    table
        .rows
        .iter()
        .map(|row| {
            let registration = RegistrationRow::from_lookup(|name| row.get(name).cloned());
            convert_row(&registration, activity)
        })
        .collect()
}

/// Derive one output row from one registration row.
///
/// The derived categorical fields run through the static lookup tables on
/// the trimmed raw value; the student override is applied after the
/// seniority lookup and always wins.
pub fn convert_row(row: &RegistrationRow, activity: &str) -> KitRow {
    let title_new = remap(&TITLE_MAP, norm_str(&row.title)).to_string();
    let seniority_new = if title_new == STUDENT_TITLE {
        STUDENT_SENIORITY.to_string()
    } else {
        remap(&SENIORITY_MAP, norm_str(&row.seniority)).to_string()
    };
    let frequency_new = remap(&FREQ_MAP, norm_str(&row.frequency)).to_string();

    let name_eq = equal_nonempty(&row.purchaser_name, &row.attendee_name, norm_name);
    let email_eq = equal_nonempty(&row.purchaser_email, &row.attendee_email, norm_email);
    let identity = IdentityMatch::from_flags(name_eq, email_eq);

    let tag = build_tag([
        title_new.as_str(),
        seniority_new.as_str(),
        frequency_new.as_str(),
        activity,
    ]);

    KitRow {
        purchaser_name: row.purchaser_name.clone(),
        purchaser_email: row.purchaser_email.clone(),
        attendee_name: row.attendee_name.clone(),
        attendee_email: row.attendee_email.clone(),
        title: row.title.clone(),
        seniority: row.seniority.clone(),
        frequency: row.frequency.clone(),
        title_new,
        seniority_new,
        frequency_new,
        activity: activity.to_string(),
        tag,
        name_eq: u8::from(name_eq),
        email_eq: u8::from(email_eq),
        name_email_label: identity.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RegistrationRow {
        RegistrationRow {
            purchaser_name: "王小美".to_string(),
            purchaser_email: "a@Test.com".to_string(),
            attendee_name: "王小美".to_string(),
            attendee_email: "a@test.com ".to_string(),
            title: "學生 Student".to_string(),
            seniority: "10年以上".to_string(),
            frequency: "1次".to_string(),
        }
    }

    #[test]
    fn same_person_when_name_and_email_agree() {
        let kit = convert_row(&row(), "");
        assert_eq!(kit.name_eq, 1);
        assert_eq!(kit.email_eq, 1);
        assert_eq!(kit.name_email_label, "同一個人");
    }

    #[test]
    fn student_override_beats_a_mapped_seniority() {
        let kit = convert_row(&row(), "");
        assert_eq!(kit.title_new, STUDENT_TITLE);
        // Raw "10年以上" maps to a real seniority, but the student
        // override replaces it unconditionally.
        assert_eq!(kit.seniority_new, STUDENT_SENIORITY);
    }

    #[test]
    fn non_student_seniority_maps_normally() {
        let mut reg = row();
        reg.title = "資料工程師 Data Engineer".to_string();
        let kit = convert_row(&reg, "");
        assert_eq!(kit.seniority_new, "年資：10 年以上（資深或主管）");
    }

    #[test]
    fn unknown_categoricals_pass_through_trimmed() {
        let mut reg = row();
        reg.title = " 自由工作者 ".to_string();
        reg.seniority = "沒填".to_string();
        reg.frequency = "很多次".to_string();
        let kit = convert_row(&reg, "");
        assert_eq!(kit.title_new, "自由工作者");
        assert_eq!(kit.seniority_new, "沒填");
        assert_eq!(kit.frequency_new, "很多次");
    }

    #[test]
    fn matching_names_with_different_emails() {
        let mut reg = row();
        reg.attendee_email = "b@test.com".to_string();
        let kit = convert_row(&reg, "");
        assert_eq!((kit.name_eq, kit.email_eq), (1, 0));
        assert_eq!(kit.name_email_label, "同一個人不同Email");
    }

    #[test]
    fn email_match_alone_counts_as_identity() {
        let mut reg = row();
        reg.purchaser_name = "王大明".to_string();
        let kit = convert_row(&reg, "");
        assert_eq!((kit.name_eq, kit.email_eq), (0, 1));
        assert_eq!(kit.name_email_label, "同一個人");
    }

    #[test]
    fn empty_names_never_compare_equal() {
        let mut reg = row();
        reg.purchaser_name = String::new();
        reg.attendee_name = String::new();
        reg.purchaser_email = String::new();
        reg.attendee_email = " ".to_string();
        let kit = convert_row(&reg, "");
        assert_eq!((kit.name_eq, kit.email_eq), (0, 0));
        assert_eq!(kit.name_email_label, "可能不同人");
    }

    #[test]
    fn tag_includes_activity_and_skips_empty_fields() {
        let mut reg = row();
        reg.frequency = String::new();
        let kit = convert_row(&reg, "講座型(202508數創小聚)");
        assert_eq!(
            kit.tag,
            format!("{STUDENT_TITLE},{STUDENT_SENIORITY},講座型(202508數創小聚)")
        );
        assert!(!kit.tag.contains(",,"));
    }

    #[test]
    fn raw_values_survive_untrimmed_in_the_output() {
        let kit = convert_row(&row(), "");
        assert_eq!(kit.attendee_email, "a@test.com ");
        assert_eq!(kit.purchaser_email, "a@Test.com");
    }
}
