#![no_main]

use factory_check::domain::value_objects::parse_address;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        if let Ok(Some(address)) = parse_address("fuzzContractAddress", value) {
            assert_eq!(value.trim().to_lowercase(), format!("{:#x}", address));
        }
    }
});
