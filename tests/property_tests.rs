/// Property-based tests using proptest
/// Tests invariants of lead validation that should hold for all inputs
use coremotion_api::models::{is_valid_email, Lead, LeadInput};
use proptest::prelude::*;

fn lead_input(name: String, email: String) -> LeadInput {
    LeadInput {
        name,
        email,
        phone: None,
        interest: None,
        message: None,
    }
}

// Property: Email validation should never panic
proptest! {
    #[test]
    fn email_validation_never_panics(email in "\\PC*") {
        let _ = is_valid_email(&email);
    }

    #[test]
    fn well_formed_emails_accepted(
        local in "[a-z][a-z0-9._+-]{0,20}[a-z0-9]",
        domain in "[a-z][a-z0-9-]{0,15}[a-z0-9]",
        tld in "[a-z]{2,6}"
    ) {
        prop_assume!(!local.contains(".."));
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_valid_email(&email), "rejected: {}", email);
    }

    #[test]
    fn internationalized_emails_accepted(
        local in "[a-zäöüéñø]{1,12}",
        domain in "[a-zäöüßçå]{1,12}",
        tld in "[a-z]{2,6}"
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_valid_email(&email), "rejected: {}", email);
        prop_assert!(Lead::try_from(lead_input("Jo".to_string(), email)).is_ok());
    }

    #[test]
    fn emails_without_at_rejected(text in "[a-zA-Z0-9.]{0,40}") {
        prop_assert!(!is_valid_email(&text));
    }
}

// Property: a valid lead is accepted and carries its input unchanged
proptest! {
    #[test]
    fn valid_leads_accepted(
        name in "\\PC{2,40}",
        local in "[a-z]{1,10}",
        domain in "[a-z]{1,10}",
        tld in "[a-z]{2,4}"
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        let lead = Lead::try_from(lead_input(name.clone(), email.clone()));
        prop_assert!(lead.is_ok());

        let lead = lead.unwrap();
        prop_assert_eq!(lead.name(), name.as_str());
        prop_assert_eq!(lead.email(), email.as_str());
    }

    #[test]
    fn short_names_rejected(name in "\\PC{0,1}") {
        let lead = Lead::try_from(lead_input(name, "jo@example.com".to_string()));
        prop_assert!(lead.is_err());
    }

    #[test]
    fn invalid_emails_rejected_for_valid_names(email in "[a-z]{1,10}(@)?") {
        let lead = Lead::try_from(lead_input("Jo".to_string(), email));
        prop_assert!(lead.is_err());
    }
}
