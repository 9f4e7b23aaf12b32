//! File-level encode and decode.
//!
//! Writes go through a temporary file in the destination directory that is
//! renamed over the target only after every byte is written and synced, so
//! a failed encode never leaves a half-written image behind.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use enough::{Stop, Unstoppable};
use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::bif::{HEADER_SIZE, ImageHeader, pixels};
use crate::decode::DecodeOutput;
use crate::encode::EncodeRequest;
use crate::error::BifError;
use crate::limits::Limits;
use crate::pixel::{PackedColor, PixelLayout};

/// Encode a solid `width` x `height` image of `color` and write it to `path`.
///
/// An existing file at `path` is replaced and keeps its permissions; a new
/// file gets the usual umask-default mode. Zero width or height fails with
/// [`BifError::InvalidDimensions`] before anything is created.
///
/// ```no_run
/// zenbif::encode_image(640, 480, (255, 0, 128), "out/pink.bif")?;
/// # Ok::<(), zenbif::BifError>(())
/// ```
pub fn encode_image<P: AsRef<Path>>(
    width: u16,
    height: u16,
    color: impl Into<PackedColor>,
    path: P,
) -> Result<(), BifError> {
    let path = path.as_ref();
    let bytes = EncodeRequest::new(width, height)
        .with_fill(color)
        .encode(Unstoppable)?;
    debug!(
        "Writing {}x{} image ({} bytes) to {}",
        width,
        height,
        bytes.len(),
        path.display()
    );
    write_atomic(path, &bytes)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Read and validate the BIF file at `path`.
///
/// ```no_run
/// let image = zenbif::decode_image("out/pink.bif")?;
/// let bgr = image.into_display();
/// # Ok::<(), zenbif::BifError>(())
/// ```
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodeOutput<'static>, BifError> {
    read_image(path.as_ref(), None, &Unstoppable)
}

/// [`decode_image`], rejecting images that exceed `limits` before the pixel
/// buffer is allocated.
pub fn decode_image_with_limits<P: AsRef<Path>>(
    path: P,
    limits: &Limits,
) -> Result<DecodeOutput<'static>, BifError> {
    read_image(path.as_ref(), Some(limits), &Unstoppable)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), BifError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_in(dir, path)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Temporary file carrying the permissions the target should end up with:
/// those of the file being replaced, or `0o666` less the umask for a new one.
fn temp_file_in(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    let existing = std::fs::metadata(target).ok().map(|meta| meta.permissions());
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    Ok(tmp)
}

fn read_image(
    path: &Path,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'static>, BifError> {
    debug!("Reading {}", path.display());
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let mut head = Vec::with_capacity(HEADER_SIZE);
    (&mut file).take(HEADER_SIZE as u64).read_to_end(&mut head)?;
    let header = ImageHeader::parse(&head)?;
    if let Some(limits) = limits {
        limits.check_header(&header)?;
    }
    stop.check()?;

    let expected = header.file_len();
    if file_len < expected {
        return Err(BifError::TruncatedFile {
            expected,
            actual: file_len,
        });
    }
    if file_len > expected {
        warn!(
            "{}: ignoring {} trailing bytes after pixel data",
            path.display(),
            file_len - expected
        );
    }

    let pixel_len = header.pixel_data_len();
    let mut buf = pixels::reserve_pixel_buffer(pixel_len)?;
    let read = (&mut file).take(pixel_len).read_to_end(&mut buf)? as u64;
    if read < pixel_len {
        // file shrank between metadata() and the read
        return Err(BifError::TruncatedFile {
            expected,
            actual: HEADER_SIZE as u64 + read,
        });
    }
    debug!(
        "Read {}x{} image ({} pixel bytes) from {}",
        header.width,
        header.height,
        read,
        path.display()
    );
    Ok(DecodeOutput::owned(buf, header, PixelLayout::Rgb8))
}
