#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bif(width: u16, height: u16, rgb: [u8; 3], reserved: u8) -> Vec<u8> {
    let mut out = b"BIFF".to_vec();
    out.extend_from_slice(&100u16.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&[rgb[0], rgb[1], rgb[2], reserved]);
    for _ in 0..usize::from(width) * usize::from(height) {
        out.extend_from_slice(&rgb);
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bif_1x1.bif"), bif(1, 1, [12, 200, 37], 0)).unwrap();
    fs::write(format!("{dir}/bif_2x2.bif"), bif(2, 2, [255, 0, 128], 0)).unwrap();
    fs::write(format!("{dir}/bif_7x3_reserved.bif"), bif(7, 3, [1, 2, 3], 0xAB)).unwrap();

    // Trailing data after the pixel region
    let mut long = bif(2, 1, [9, 9, 9], 0);
    long.extend_from_slice(b"trailer");
    fs::write(format!("{dir}/bif_trailing.bif"), long).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"BIFF").unwrap();
    let mut cut = bif(4, 4, [0, 0, 0], 0);
    cut.pop();
    fs::write(format!("{dir}/bif_cut.bin"), cut).unwrap();
    let mut v101 = bif(1, 1, [0, 0, 0], 0);
    v101[4] = 101;
    fs::write(format!("{dir}/bif_v101.bin"), v101).unwrap();
    // Header claiming 65535x65535 with no payload
    let mut huge = bif(0, 0, [0, 0, 0], 0);
    huge[6..10].copy_from_slice(&[0xFF; 4]);
    fs::write(format!("{dir}/bif_huge_header.bin"), huge).unwrap();

    println!("Generated seed corpus in {dir}/");
}
