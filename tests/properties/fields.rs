//! Property tests for field validation.

use proptest::prelude::*;

use cinterns::domain::value_objects::{
    Company, Contact, Date, Email, Field, InterviewDate, InterviewTime, Location, Position, Round,
};

use crate::strategies;

fn check_validity_agrees<F: Field + std::fmt::Debug>(raw: &str) -> Result<(), TestCaseError> {
    prop_assert_eq!(F::is_valid(raw), F::parse(raw).is_ok());
    if let Ok(value) = F::parse(raw) {
        // parse(to_raw(x)) == x
        prop_assert_eq!(F::parse(&value.to_raw()).ok().map(|v| v.to_raw()), Some(value.to_raw()));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `is_valid` and `parse` agree for every field on arbitrary input.
    #[test]
    fn property_is_valid_matches_parse(raw in "(?s).{0,40}") {
        check_validity_agrees::<Company>(&raw)?;
        check_validity_agrees::<Contact>(&raw)?;
        check_validity_agrees::<Email>(&raw)?;
        check_validity_agrees::<Position>(&raw)?;
        check_validity_agrees::<Date>(&raw)?;
        check_validity_agrees::<Round>(&raw)?;
        check_validity_agrees::<InterviewDate>(&raw)?;
        check_validity_agrees::<InterviewTime>(&raw)?;
        check_validity_agrees::<Location>(&raw)?;
    }

    /// PROPERTY: Generated valid values are accepted and stored verbatim.
    #[test]
    fn property_valid_values_accepted(
        company in strategies::text(),
        contact in strategies::contact(),
        email in strategies::email(),
        date in strategies::iso_date(),
        time in strategies::time(),
    ) {
        prop_assert_eq!(Company::parse(&company).unwrap().to_raw(), company);
        prop_assert_eq!(Contact::parse(&contact).unwrap().to_raw(), contact);
        prop_assert_eq!(Email::parse(&email).unwrap().to_raw(), email);
        prop_assert_eq!(Date::parse(&date).unwrap().to_raw(), date.clone());
        prop_assert_eq!(InterviewDate::parse(&date).unwrap().to_raw(), date);
        prop_assert_eq!(InterviewTime::parse(&time).unwrap().to_raw(), time);
    }

    /// PROPERTY: Contacts outside 3..=15 digits are rejected.
    #[test]
    fn property_contact_length_bounds(digits in "[0-9]{0,2}|[0-9]{16,24}") {
        prop_assert!(!Contact::is_valid(&digits));
    }

    /// PROPERTY: Values starting with whitespace are never valid text.
    #[test]
    fn property_leading_whitespace_rejected(rest in "[A-Za-z]{0,10}", ws in "[ \t]{1,3}") {
        let raw = format!("{ws}{rest}");
        prop_assert!(!Company::is_valid(&raw));
        prop_assert!(!Round::is_valid(&raw));
    }
}
