#![no_main]

use cinterns::infrastructure::repositories::{JsonApplicationRecord, JsonSerializableBook};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(record) = serde_json::from_str::<JsonApplicationRecord>(content) {
            // A record that converts must write back to an equivalent record
            if let Ok(application) = record.to_model() {
                let again = JsonApplicationRecord::from(&application).to_model();
                assert_eq!(again.as_ref(), Ok(&application));
            }
        }
        if let Ok(book) = serde_json::from_str::<JsonSerializableBook>(content) {
            let _ = book.to_model();
        }
    }
});
