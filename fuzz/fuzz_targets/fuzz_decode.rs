#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic
    let _ = limg::decode(data, enough::Unstoppable);
    let _ = limg::ImageInfo::from_bytes(data);
});
