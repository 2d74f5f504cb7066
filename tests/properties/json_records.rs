//! Property tests for the JSON storage records.

use proptest::prelude::*;

use cinterns::infrastructure::repositories::{JsonApplicationRecord, JsonSerializableBook};
use cinterns::ApplicationBook;

use crate::strategies;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: to_model(from(a)) == a, through a JSON string.
    #[test]
    fn property_record_round_trip(application in strategies::application()) {
        let record = JsonApplicationRecord::from(&application);
        let json = serde_json::to_string(&record).unwrap();
        let decoded: JsonApplicationRecord = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(decoded.to_model(), Ok(application));
    }

    /// PROPERTY: Interview order in the file does not affect equality.
    #[test]
    fn property_interview_order_irrelevant(application in strategies::application()) {
        let mut record = JsonApplicationRecord::from(&application);
        record.tagged.reverse();

        prop_assert_eq!(record.to_model(), Ok(application));
    }

    /// PROPERTY: A book survives serialization unchanged.
    #[test]
    fn property_book_round_trip(applications in proptest::collection::vec(strategies::application(), 0..5)) {
        let mut book = ApplicationBook::new();
        for application in applications {
            if !book.has_application(&application) {
                book.add_application(application);
            }
        }

        let json = serde_json::to_string_pretty(&JsonSerializableBook::from(&book)).unwrap();
        let decoded: JsonSerializableBook = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(decoded.to_model().unwrap(), book);
    }
}
