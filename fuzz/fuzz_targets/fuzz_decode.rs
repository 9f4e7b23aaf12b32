#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode must never panic
    let _ = zenbif::ImageHeader::peek(data);
    let limits = zenbif::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    if let Ok(decoded) = zenbif::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    {
        let _ = decoded.into_display();
    }
});
