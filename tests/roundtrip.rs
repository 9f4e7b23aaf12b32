use enough::Unstoppable;
use zenbif::*;

const COLORS: [(u8, u8, u8); 3] = [(0, 0, 0), (255, 255, 255), (12, 200, 37)];

fn assert_solid(decoded: &DecodeOutput<'_>, color: (u8, u8, u8)) {
    let (r, g, b) = color;
    assert_eq!(decoded.pixels().len(), buffer_size(decoded.width(), decoded.height()) as usize);
    for (i, px) in decoded.pixels().chunks_exact(3).enumerate() {
        assert_eq!(px, [r, g, b], "pixel {i} differs");
    }
}

#[test]
fn concrete_2x2_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.bif");

    encode_image(2, 2, (255, 0, 128), &path).unwrap();
    let decoded = decode_image(&path).unwrap();

    assert_eq!(
        decoded.header,
        ImageHeader {
            version: 100,
            width: 2,
            height: 2,
            fill: PackedColor::from_rgb(255, 0, 128),
        }
    );
    assert_eq!(decoded.layout, PixelLayout::Rgb8);
    assert_eq!(
        decoded.pixels(),
        &[255, 0, 128, 255, 0, 128, 255, 0, 128, 255, 0, 128]
    );

    let raw = std::fs::read(&path).unwrap();
    assert_eq!(raw.len(), 14 + 12);
    assert_eq!(&raw[0..4], &MAGIC);
}

#[test]
fn single_pixel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.bif");

    encode_image(1, 1, (12, 200, 37), &path).unwrap();
    let decoded = decode_image(&path).unwrap();
    assert_eq!(decoded.width(), 1);
    assert_eq!(decoded.height(), 1);
    assert_eq!(decoded.pixels(), &[12, 200, 37]);
}

#[test]
fn file_roundtrip_grid() {
    let dir = tempfile::tempdir().unwrap();
    let sizes = [1u16, 2, 3, 17, 64, 255, 499, 500];
    for &w in &sizes {
        for &h in &[1u16, 5, 500] {
            for color in COLORS {
                let path = dir.path().join(format!("{w}x{h}.bif"));
                encode_image(w, h, color, &path).unwrap();
                let decoded = decode_image(&path).unwrap();
                assert_eq!(decoded.width(), w);
                assert_eq!(decoded.height(), h);
                assert_eq!(decoded.header.version, FORMAT_VERSION);
                assert_eq!(decoded.header.fill, PackedColor::from(color));
                assert_solid(&decoded, color);
            }
        }
    }
}

#[test]
fn bytes_roundtrip_grid() {
    for w in (1u16..=500).step_by(37) {
        for h in (1u16..=500).step_by(53) {
            for color in COLORS {
                let encoded = encode(w, h, color, Unstoppable).unwrap();
                assert_eq!(encoded.len() as u64, 14 + buffer_size(w, h));
                let decoded = decode(&encoded, Unstoppable).unwrap();
                assert_eq!((decoded.width(), decoded.height()), (w, h));
                assert!(decoded.is_borrowed(), "slice decode should be zero-copy");
                assert_solid(&decoded, color);
            }
        }
    }
}

#[test]
fn encode_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("same.bif");

    encode_image(33, 7, (12, 200, 37), &path).unwrap();
    let first = std::fs::read(&path).unwrap();
    encode_image(33, 7, (12, 200, 37), &path).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn encode_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("replace.bif");
    std::fs::write(&path, vec![0xAAu8; 4096]).unwrap();

    encode_image(2, 1, (1, 2, 3), &path).unwrap();
    let raw = std::fs::read(&path).unwrap();
    assert_eq!(raw.len(), 14 + 6);
    assert_eq!(&raw[14..], &[1, 2, 3, 1, 2, 3]);
}

#[cfg(unix)]
#[test]
fn new_file_gets_umask_default_mode() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("plain.bin");
    std::fs::write(&reference, b"x").unwrap();
    let path = dir.path().join("fresh.bif");

    encode_image(3, 2, (9, 8, 7), &path).unwrap();
    let mode = |p: &std::path::Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&path), mode(&reference));
}

#[cfg(unix)]
#[test]
fn replacing_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.bif");
    std::fs::write(&path, b"old").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

    encode_image(1, 1, (1, 1, 1), &path).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
    assert_eq!(std::fs::read(&path).unwrap().len(), 14 + 3);
}

#[test]
fn zero_dimensions_create_nothing() {
    let dir = tempfile::tempdir().unwrap();
    for (w, h) in [(0u16, 10u16), (10, 0), (0, 0)] {
        let path = dir.path().join(format!("zero_{w}_{h}.bif"));
        match encode_image(w, h, (1, 2, 3), &path) {
            Err(BifError::InvalidDimensions { width, height }) => {
                assert_eq!((width, height), (w, h));
            }
            other => panic!("expected InvalidDimensions, got {other:?}"),
        }
        assert!(!path.exists());
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_parent_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/x.bif");
    match encode_image(1, 1, (0, 0, 0), &path) {
        Err(BifError::Io(_)) => {}
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    match decode_image(dir.path().join("absent.bif")) {
        Err(BifError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn decode_then_encode_pixels_is_byte_identical() {
    let encoded = encode(9, 4, (12, 200, 37), Unstoppable).unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();

    let reencoded = EncodeRequest::new(decoded.width(), decoded.height())
        .with_fill(decoded.header.fill)
        .encode_pixels(decoded.pixels(), decoded.layout, Unstoppable)
        .unwrap();
    assert_eq!(reencoded, encoded);
}

#[test]
fn display_order_does_not_leak_into_storage() {
    let encoded = encode(3, 2, (255, 0, 128), Unstoppable).unwrap();
    let display = decode(&encoded, Unstoppable).unwrap().into_display();
    assert_eq!(display.layout, PixelLayout::Bgr8);
    for px in display.pixels().chunks_exact(3) {
        assert_eq!(px, [128, 0, 255]);
    }

    // BGR input is written back in RGB order
    let reencoded = EncodeRequest::new(3, 2)
        .with_fill(display.header.fill)
        .encode_pixels(display.pixels(), display.layout, Unstoppable)
        .unwrap();
    assert_eq!(reencoded, encoded);
}

#[test]
fn reserved_fill_byte_roundtrips() {
    let fill = PackedColor::from_bits(0x7F80_00FF);
    let encoded = EncodeRequest::new(1, 1)
        .with_fill(fill)
        .encode(Unstoppable)
        .unwrap();
    assert_eq!(&encoded[10..14], &[0xFF, 0x00, 0x80, 0x7F]);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.header.fill, fill);
    assert_eq!(decoded.header.fill.reserved(), 0x7F);
    assert_eq!(decoded.pixels(), &[0xFF, 0x00, 0x80]);
}

#[test]
fn into_owned_works() {
    let encoded = encode(1, 3, (1, 2, 3), Unstoppable).unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert!(decoded.is_borrowed());

    let owned = decoded.into_owned();
    assert!(!owned.is_borrowed());
    assert_eq!(owned.pixels(), &[1, 2, 3, 1, 2, 3, 1, 2, 3]);
    assert_eq!(owned.into_pixels().len(), 9);
}
