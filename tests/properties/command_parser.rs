//! Property tests for the command parser.

use proptest::prelude::*;

use cinterns::commands::Command;
use cinterns::domain::value_objects::Field;
use cinterns::parse_command;

use crate::strategies;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The parser never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,200}") {
        let _ = parse_command(&input);
    }

    /// PROPERTY: Parsing never panics on inputs built from command words and prefixes.
    #[test]
    fn property_parse_prefix_soup_never_panics(
        word in "add|edit|delete|interview|list",
        parts in proptest::collection::vec("(c/|ct/|e/|p/|d/|r/|t/|l/)?[A-Za-z0-9@.:-]{0,8}", 0..10),
    ) {
        let _ = parse_command(&format!("{word} {}", parts.join(" ")));
    }

    /// PROPERTY: An add command built from any application parses back to it,
    /// and parsing the same text twice gives equal commands.
    #[test]
    fn property_add_round_trip(application in strategies::application()) {
        let input = format!(
            "add c/{} ct/{} e/{} p/{} d/{}",
            application.company().to_raw(),
            application.contact().to_raw(),
            application.email().to_raw(),
            application.position().to_raw(),
            application.date().to_raw(),
        );

        let first = parse_command(&input);
        let second = parse_command(&input);
        prop_assert_eq!(&first, &second);

        let Ok(Command::Add(add)) = first else {
            return Err(TestCaseError::fail(format!("expected add command for {input}")));
        };
        // parsed applications start without interviews
        prop_assert!(add.application().interviews().is_empty());
        prop_assert!(add.application().is_same_application(&application));
        prop_assert_eq!(add.application().contact(), application.contact());
        prop_assert_eq!(add.application().email(), application.email());
    }

    /// PROPERTY: With a repeated prefix the last value wins.
    #[test]
    fn property_last_prefix_value_wins(
        first in strategies::text(),
        last in strategies::text(),
    ) {
        let input = format!(
            "add c/{first} c/{last} ct/12345 e/a@ab.com p/SWE d/2022-01-01"
        );
        let Ok(Command::Add(add)) = parse_command(&input) else {
            return Err(TestCaseError::fail("expected add command"));
        };
        prop_assert_eq!(add.application().company().as_str(), last.as_str());
    }
}
