#![no_main]

use factory_check::infrastructure::artifact::{parse_artifact, render_artifact};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Anything that parses must survive a rewrite unchanged
        if let Ok(config) = parse_artifact(text) {
            let rendered = render_artifact(&config).unwrap();
            assert_eq!(parse_artifact(&rendered).unwrap(), config);
        }
    }
});
