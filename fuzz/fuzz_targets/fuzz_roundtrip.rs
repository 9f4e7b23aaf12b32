#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbif::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the header and pixel region byte for byte
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };
    if decoded.width() == 0 || decoded.height() == 0 {
        return; // encoder rejects empty images
    }

    let reencoded = EncodeRequest::new(decoded.width(), decoded.height())
        .with_fill(decoded.header.fill)
        .encode_pixels(decoded.pixels(), decoded.layout, enough::Unstoppable)
        .expect("decoded image failed to re-encode");
    assert_eq!(&reencoded[..], &data[..reencoded.len()], "roundtrip byte mismatch");

    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.header, decoded2.header);
});
