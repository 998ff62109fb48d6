#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If it decodes, re-encoding and decoding again must reproduce it
    let Ok(decoded) = limg::decode(data, enough::Unstoppable) else {
        return;
    };
    let reencoded = limg::encode(&decoded, enough::Unstoppable).unwrap();
    let again = limg::decode(&reencoded, enough::Unstoppable).unwrap();
    assert_eq!(again, decoded);
});
