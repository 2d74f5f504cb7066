#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing arbitrary input should never panic
        if let Ok(command) = cinterns::parse_command(input) {
            // and a parsed command should run against an empty book without panicking
            let _ = command.execute(&mut cinterns::ApplicationBook::new());
        }
    }
});
