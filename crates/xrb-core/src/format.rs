//! Formatters, one per command family.
//!
//! All of them are pure string builders over the typed payloads the ports
//! return; none of them touches shared state or fails.

use crate::commands::Keyword;
use crate::errors::RemoteQueryError;
use crate::ports::{ContactCategory, ContactForm, SoftwareVersion, XepDocument};

/// Software version reply: one selected field, or the composite sentence.
pub fn version(v: &SoftwareVersion, target: &str, opt_arg: Option<&str>) -> String {
    match opt_arg {
        Some("version") => format!("version: {}", v.version),
        Some("os") => format!("os: {}", v.os),
        Some("name") => format!("name: {}", v.name),
        _ => format!(
            "{target} is running {} version {} on {}",
            v.name, v.version, v.os
        ),
    }
}

// Displayable time sections, largest first.
const INTERVALS: [(&str, u64); 6] = [
    ("years", 31_536_000),
    ("weeks", 604_800),
    ("days", 86_400),
    ("hours", 3_600),
    ("minutes", 60),
    ("seconds", 1),
];

/// Most significant non-zero units rendered in an uptime breakdown.
const GRANULARITY: usize = 4;

/// Uptime reply: greedy unit breakdown of a duration in seconds.
pub fn uptime(mut seconds: u64, target: &str) -> String {
    let mut parts = Vec::new();
    for (name, span) in INTERVALS {
        let value = seconds / span;
        if value > 0 {
            seconds -= value * span;
            let unit = if value == 1 {
                name.trim_end_matches('s')
            } else {
                name
            };
            parts.push(format!("{value} {unit}"));
        }
    }
    parts.truncate(GRANULARITY);
    if parts.is_empty() {
        parts.push("0 seconds".to_string());
    }

    format!("{target} is running since {}", parts.join(" "))
}

/// Contact address reply: one selected category, or every non-empty one.
pub fn contact(form: &ContactForm, target: &str, opt_arg: Option<&str>) -> String {
    let selected = opt_arg.and_then(ContactCategory::from_selector);

    let listed: Vec<(ContactCategory, &[String])> = match selected {
        Some(category) => form
            .get(category)
            .filter(|addresses| !addresses.is_empty())
            .map(|addresses| vec![(category, addresses)])
            .unwrap_or_default(),
        None => form.non_empty(),
    };

    if listed.is_empty() {
        return match selected {
            Some(category) => format!("{} for {target} are not defined.", category.var()),
            None => format!("{target} has no contact addresses configured."),
        };
    }

    let mut text = match selected {
        Some(category) => format!("{} for {target} are", category.var()),
        None => format!("contact addresses for {target} are"),
    };
    for (category, addresses) in listed {
        text.push_str(&format!("\n- {} : {}", category.var(), addresses.join(" , ")));
    }
    text
}

/// Default subset rendered when no sub-field is requested.
const XEP_SUMMARY_FIELDS: [&str; 4] = ["title", "type", "abstract", "status"];

/// Extension document reply: not-available sentence, one selected field, or
/// the default subset.
pub fn xep(doc: Option<&XepDocument>, requested: &str, opt_arg: Option<&str>) -> String {
    let Some(doc) = doc else {
        return format!("XEP-{requested} : is not available.");
    };

    if let Some(tag) = opt_arg {
        if let Some(value) = doc.field(tag) {
            return format!("{tag} : {value}");
        }
    }

    XEP_SUMMARY_FIELDS
        .iter()
        .filter_map(|tag| doc.field(tag))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One user-visible line for a failed remote query.
pub fn error_report(err: &RemoteQueryError, keyword: Keyword, target: &str) -> String {
    format!(
        "{}. {} {} resulted in: {}",
        err.text,
        keyword.name(),
        target,
        err.condition
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::XepRevision;

    fn sample_version() -> SoftwareVersion {
        SoftwareVersion {
            name: "Foo".to_string(),
            version: "1.0".to_string(),
            os: "Linux".to_string(),
        }
    }

    #[test]
    fn version_composite_sentence() {
        assert_eq!(
            version(&sample_version(), "example.com", None),
            "example.com is running Foo version 1.0 on Linux"
        );
    }

    #[test]
    fn version_sub_field_selection() {
        let v = sample_version();
        assert_eq!(version(&v, "example.com", Some("os")), "os: Linux");
        assert_eq!(version(&v, "example.com", Some("name")), "name: Foo");
        assert_eq!(version(&v, "example.com", Some("version")), "version: 1.0");
    }

    #[test]
    fn version_unknown_sub_field_falls_back_to_composite() {
        assert_eq!(
            version(&sample_version(), "example.com", Some("kernel")),
            "example.com is running Foo version 1.0 on Linux"
        );
    }

    #[test]
    fn uptime_breakdown_of_mixed_units() {
        assert_eq!(
            uptime(90_061, "a.com"),
            "a.com is running since 1 day 1 hour 1 minute 1 second"
        );
    }

    #[test]
    fn uptime_skips_zero_units() {
        assert_eq!(
            uptime(31_536_000 + 3_600, "a.com"),
            "a.com is running since 1 year 1 hour"
        );
    }

    #[test]
    fn uptime_truncates_to_four_units() {
        // 1 year 1 week 1 day 1 hour 1 minute 1 second.
        let seconds = 31_536_000 + 604_800 + 86_400 + 3_600 + 60 + 1;
        assert_eq!(
            uptime(seconds, "a.com"),
            "a.com is running since 1 year 1 week 1 day 1 hour"
        );
    }

    #[test]
    fn uptime_pluralizes_values_above_one() {
        assert_eq!(uptime(120, "a.com"), "a.com is running since 2 minutes");
        assert_eq!(uptime(0, "a.com"), "a.com is running since 0 seconds");
    }

    fn sample_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.insert(
            ContactCategory::Abuse,
            vec!["mailto:abuse@example.com".to_string()],
        );
        form.insert(
            ContactCategory::Support,
            vec![
                "mailto:support@example.com".to_string(),
                "xmpp:support@example.com".to_string(),
            ],
        );
        form
    }

    #[test]
    fn contact_lists_every_non_empty_category() {
        assert_eq!(
            contact(&sample_form(), "example.com", None),
            "contact addresses for example.com are\n\
             - abuse-addresses : mailto:abuse@example.com\n\
             - support-addresses : mailto:support@example.com , xmpp:support@example.com"
        );
    }

    #[test]
    fn contact_selects_one_category_with_abbreviation() {
        assert_eq!(
            contact(&sample_form(), "example.com", Some("sup")),
            "support-addresses for example.com are\n\
             - support-addresses : mailto:support@example.com , xmpp:support@example.com"
        );
    }

    #[test]
    fn contact_selected_but_empty_category() {
        assert_eq!(
            contact(&sample_form(), "example.com", Some("security")),
            "security-addresses for example.com are not defined."
        );
    }

    #[test]
    fn contact_nothing_configured() {
        assert_eq!(
            contact(&ContactForm::new(), "example.com", None),
            "example.com has no contact addresses configured."
        );
    }

    fn sample_doc() -> XepDocument {
        XepDocument {
            number: 45,
            title: "Multi-User Chat".to_string(),
            doc_type: "Standards Track".to_string(),
            summary: "Multi-user text conferencing.".to_string(),
            status: "Draft".to_string(),
            revision: XepRevision {
                date: "2021-03-04".to_string(),
                version: "1.34.3".to_string(),
                ..XepRevision::default()
            },
            ..XepDocument::default()
        }
    }

    #[test]
    fn xep_default_subset() {
        assert_eq!(
            xep(Some(&sample_doc()), "45", None),
            "Multi-User Chat\nStandards Track\nMulti-user text conferencing.\nDraft"
        );
    }

    #[test]
    fn xep_selected_field_and_revision_field() {
        assert_eq!(
            xep(Some(&sample_doc()), "45", Some("status")),
            "status : Draft"
        );
        assert_eq!(
            xep(Some(&sample_doc()), "45", Some("date")),
            "date : 2021-03-04"
        );
    }

    #[test]
    fn xep_unknown_sub_field_falls_back_to_subset() {
        assert_eq!(
            xep(Some(&sample_doc()), "45", Some("colour")),
            xep(Some(&sample_doc()), "45", None)
        );
    }

    #[test]
    fn xep_not_available() {
        assert_eq!(xep(None, "9999", None), "XEP-9999 : is not available.");
    }

    #[test]
    fn error_report_names_keyword_target_and_condition() {
        let err = RemoteQueryError::new("item-not-found", "Item not found");
        assert_eq!(
            error_report(&err, Keyword::Contact, "a.com"),
            "Item not found. !contact a.com resulted in: item-not-found"
        );
    }
}
