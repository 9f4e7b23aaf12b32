//! BIF pixel codec: buffer sizing, solid fill, and RGB/BGR reordering.
//!
//! Pixel bytes are stored on disk in memory order (R, G, B). The only
//! reordering happens on the way to a BGR display surface.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::BifError;

/// Bytes per stored pixel.
pub const CHANNELS: u64 = 3;

/// Size in bytes of a `width` x `height` pixel buffer.
///
/// Computed in `u64`: 65535 x 65535 x 3 does not fit in 32 bits.
pub fn buffer_size(width: u16, height: u16) -> u64 {
    u64::from(width) * u64::from(height) * CHANNELS
}

/// Allocate a zeroed pixel buffer of `len` bytes without aborting on OOM.
pub fn alloc_pixel_buffer(len: u64) -> Result<Vec<u8>, BifError> {
    let n = to_usize(len)?;
    let mut buf = reserve_pixel_buffer(len)?;
    buf.resize(n, 0);
    Ok(buf)
}

/// Empty buffer with room for exactly `len` bytes.
pub(crate) fn reserve_pixel_buffer(len: u64) -> Result<Vec<u8>, BifError> {
    let n = to_usize(len)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(n)
        .map_err(|_| BifError::AllocationFailure { bytes: len })?;
    Ok(buf)
}

/// Convert a pixel buffer size to `usize`, the size an in-memory slice can have.
pub(crate) fn to_usize(len: u64) -> Result<usize, BifError> {
    usize::try_from(len).map_err(|_| BifError::AllocationFailure { bytes: len })
}

/// Overwrite every pixel of `buf` with `r, g, b`, in row-major order.
pub fn fill_solid(
    buf: &mut [u8],
    width: u16,
    height: u16,
    r: u8,
    g: u8,
    b: u8,
    stop: &dyn Stop,
) -> Result<(), BifError> {
    let needed = to_usize(buffer_size(width, height))?;
    if buf.len() < needed {
        return Err(BifError::BufferTooSmall {
            needed,
            actual: buf.len(),
        });
    }
    if needed == 0 {
        return Ok(());
    }
    let row_bytes = usize::from(width) * 3;
    for (row_idx, row) in buf[..needed].chunks_exact_mut(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row.chunks_exact_mut(3) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
        }
    }
    Ok(())
}

/// Swap the first and third byte of every complete 3-byte pixel in place.
///
/// Applying it twice restores the input. A trailing partial pixel is left as is.
pub fn swap_channels(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}

/// Copy of `pixels` in display order: `[R, G, B]` becomes `[B, G, R]`.
pub fn reorder_for_display(pixels: &[u8]) -> Vec<u8> {
    let mut out = pixels.to_vec();
    swap_channels(&mut out);
    out
}

/// Append `pixels` to `out`, swapping to the opposite channel order row by row.
pub(crate) fn extend_swapped(
    out: &mut Vec<u8>,
    pixels: &[u8],
    width: u16,
    stop: &dyn Stop,
) -> Result<(), BifError> {
    let row_bytes = usize::from(width) * 3;
    if row_bytes == 0 {
        return Ok(());
    }
    for (row_idx, row) in pixels.chunks_exact(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row.chunks_exact(3) {
            out.push(px[2]);
            out.push(px[1]);
            out.push(px[0]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;

    #[test]
    fn buffer_size_uses_wide_arithmetic() {
        assert_eq!(buffer_size(65535, 65535), 12_884_508_675);
        assert!(buffer_size(65535, 65535) > u64::from(u32::MAX));
        assert_eq!(buffer_size(1, 1), 3);
        assert_eq!(buffer_size(0, 500), 0);
    }

    #[test]
    fn fill_overwrites_every_pixel() {
        let mut buf = vec![7u8; 2 * 3 * 3];
        fill_solid(&mut buf, 2, 3, 12, 200, 37, &Unstoppable).unwrap();
        for px in buf.chunks_exact(3) {
            assert_eq!(px, [12, 200, 37]);
        }
    }

    #[test]
    fn fill_leaves_tail_alone() {
        let mut buf = vec![9u8; 7];
        fill_solid(&mut buf, 1, 2, 1, 2, 3, &Unstoppable).unwrap();
        assert_eq!(buf, [1, 2, 3, 1, 2, 3, 9]);
    }

    #[test]
    fn fill_rejects_short_buffer() {
        let mut buf = vec![0u8; 5];
        match fill_solid(&mut buf, 2, 1, 0, 0, 0, &Unstoppable) {
            Err(BifError::BufferTooSmall {
                needed: 6,
                actual: 5,
            }) => {}
            other => panic!("expected BufferTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn fill_zero_width_is_noop() {
        let mut buf = Vec::<u8>::new();
        fill_solid(&mut buf, 0, 10, 1, 2, 3, &Unstoppable).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn alloc_is_zeroed() {
        let buf = alloc_pixel_buffer(12).unwrap();
        assert_eq!(buf, vec![0u8; 12]);
    }

    #[test]
    fn alloc_reports_impossible_size() {
        match alloc_pixel_buffer(u64::MAX) {
            Err(BifError::AllocationFailure { bytes }) => assert_eq!(bytes, u64::MAX),
            other => panic!("expected AllocationFailure, got {other:?}"),
        }
    }

    #[test]
    fn swap_is_an_involution() {
        let original: Vec<u8> = (0..=255u8).cycle().take(3 * 41 + 2).collect();
        let once = reorder_for_display(&original);
        assert_ne!(once, original);
        assert_eq!(&once[0..3], &[2, 1, 0]);
        // partial trailing pixel untouched
        assert_eq!(&once[123..], &original[123..]);
        assert_eq!(reorder_for_display(&once), original);
    }

    #[test]
    fn extend_swapped_matches_in_place_swap() {
        let pixels = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let mut out = Vec::new();
        extend_swapped(&mut out, &pixels, 2, &Unstoppable).unwrap();
        assert_eq!(out, reorder_for_display(&pixels));
    }
}
