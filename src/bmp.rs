//! Serializes a finished pixel buffer as an uncompressed 24-bit
//! Windows bitmap: a 14-byte file header, a 40-byte BITMAPINFOHEADER,
//! then the pixel rows.  The header declares a positive height, so
//! the rows go out bottom-up as classic BMP mandates.  The file is
//! written to a temporary name in the destination directory and
//! renamed into place, so a failed write never leaves a partial file
//! behind.

use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use errors::RenderError;
use raster::PixelBuffer;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 72 dots per inch, expressed in pixels per metre.
const RESOLUTION_PPM: i32 = 2835;

/// Writes the buffer to `path` as a 24-bit uncompressed bitmap.
pub fn write_bmp(path: &Path, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let expected = buffer.stride() * buffer.height();
    if buffer.bytes().len() != expected {
        return Err(RenderError::Encoding {
            actual: buffer.bytes().len(),
            expected,
        });
    }

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(directory)?;
    {
        let mut out = BufWriter::new(staging.as_file_mut());
        write_headers(&mut out, buffer)?;
        // The buffer keeps row 0 at the top; the file wants the
        // bottom row first.
        for row in (0..buffer.height()).rev() {
            let start = row * buffer.stride();
            out.write_all(&buffer.bytes()[start..start + buffer.stride()])?;
        }
        out.flush()?;
    }
    staging
        .persist(path)
        .map_err(|err| RenderError::Io(err.error))?;
    Ok(())
}

fn write_headers<W: Write>(out: &mut W, buffer: &PixelBuffer) -> Result<(), io::Error> {
    let data_size = (buffer.stride() * buffer.height()) as u32;

    // BITMAPFILEHEADER: signature, file size, two reserved words,
    // offset to the pixel data.
    out.write_all(b"BM")?;
    out.write_all(&(PIXEL_DATA_OFFSET + data_size).to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&0u16.to_le_bytes())?;
    out.write_all(&PIXEL_DATA_OFFSET.to_le_bytes())?;

    // BITMAPINFOHEADER.
    out.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
    out.write_all(&(buffer.width() as i32).to_le_bytes())?;
    out.write_all(&(buffer.height() as i32).to_le_bytes())?; // positive: bottom-up
    out.write_all(&1u16.to_le_bytes())?; // colour planes
    out.write_all(&24u16.to_le_bytes())?; // bits per pixel
    out.write_all(&0u32.to_le_bytes())?; // BI_RGB, uncompressed
    out.write_all(&data_size.to_le_bytes())?;
    out.write_all(&RESOLUTION_PPM.to_le_bytes())?;
    out.write_all(&RESOLUTION_PPM.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?; // palette colours
    out.write_all(&0u32.to_le_bytes())?; // important colours
    Ok(())
}
