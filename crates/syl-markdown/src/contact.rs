//! Contact pointer for questions nothing else could answer.

use crate::helpers::extract_emails;

const NOT_FOUND: &str = "I couldn't find that in the course materials.";

/// Pick the best contact address in a policy document.
///
/// Coordinator addresses win when the document talks about a coordinator,
/// then admin addresses, then `info-` or course addresses, then whichever
/// address appears first.
#[must_use]
pub fn extract_contact_email(content: &str) -> Option<String> {
    let mut emails: Vec<String> = Vec::new();
    for email in extract_emails(content) {
        if !emails.contains(&email) {
            emails.push(email);
        }
    }

    let mentions_coordinator = content.to_lowercase().contains("coordinator");
    let tiers: [&dyn Fn(&str) -> bool; 3] = [
        &|e: &str| mentions_coordinator && e.contains("coordinator"),
        &|e: &str| e.contains("admin"),
        &|e: &str| e.contains("info-") || e.contains("course"),
    ];

    tiers
        .iter()
        .find_map(|tier| emails.iter().find(|e| tier(&e.to_lowercase())))
        .or_else(|| emails.first())
        .cloned()
}

/// The generic "couldn't find it" message, pointing at the forum and, when
/// known, a contact address.
#[must_use]
pub fn fallback_message(email: Option<&str>) -> String {
    match email {
        Some(email) => format!(
            "{NOT_FOUND} Please post on Ed Discussion or Piazza, or email at {email}."
        ),
        None => format!("{NOT_FOUND} Please post on Ed Discussion or Piazza with your question."),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn admin_beats_first_found() {
        let doc = "Instructor: ada@cs.ubc.ca. Logistics: cpsc330-admin@cs.ubc.ca.";
        assert_eq!(
            extract_contact_email(doc).as_deref(),
            Some("cpsc330-admin@cs.ubc.ca")
        );
    }

    #[test]
    fn coordinator_address_needs_coordinator_mention() {
        let with = "Course coordinator: mds-coordinator@stat.ubc.ca or mds-admin@stat.ubc.ca";
        assert_eq!(
            extract_contact_email(with).as_deref(),
            Some("mds-coordinator@stat.ubc.ca")
        );
    }

    #[test]
    fn mailto_addresses_count_and_dedupe() {
        let doc = "[Email](mailto:info-mds@stat.ubc.ca) or info-mds@stat.ubc.ca";
        assert_eq!(extract_contact_email(doc).as_deref(), Some("info-mds@stat.ubc.ca"));
    }

    #[test]
    fn first_address_when_nothing_preferred() {
        assert_eq!(
            extract_contact_email("ada@cs.ubc.ca and grace@cs.ubc.ca").as_deref(),
            Some("ada@cs.ubc.ca")
        );
        assert_eq!(extract_contact_email("no addresses here"), None);
    }

    #[test]
    fn messages() {
        assert_eq!(
            fallback_message(Some("x@ubc.ca")),
            "I couldn't find that in the course materials. Please post on Ed Discussion or Piazza, or email at x@ubc.ca."
        );
        assert_eq!(
            fallback_message(None),
            "I couldn't find that in the course materials. Please post on Ed Discussion or Piazza with your question."
        );
    }
}
