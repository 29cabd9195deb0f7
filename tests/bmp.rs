extern crate image;
extern crate mandelplot;
extern crate tempfile;

use std::fs;
use std::path::Path;

use mandelplot::{
    write_bmp, CosinePalette, Pixel, PixelBuffer, RenderConfig, RenderError, Renderer,
};

fn render(width: usize, height: usize) -> PixelBuffer {
    let config = RenderConfig::new(width, height, 25, 4.0).unwrap();
    Renderer::new(&config, &CosinePalette).render().unwrap()
}

#[test]
fn written_bitmap_round_trips_losslessly() {
    let buffer = render(16, 16);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plot.bmp");
    write_bmp(&path, &buffer).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb();
    assert_eq!(decoded.dimensions(), (16, 16));
    for row in 0..16 {
        for column in 0..16 {
            let expected = buffer.pixel(&Pixel(column, row));
            let actual = decoded.get_pixel(column as u32, row as u32);
            assert_eq!(
                (actual[0], actual[1], actual[2]),
                (expected.0, expected.1, expected.2),
                "pixel {},{} differs after the round trip",
                column,
                row
            );
        }
    }
}

#[test]
fn file_length_accounts_for_row_padding() {
    // A 3-pixel row is 9 bytes of channels padded to 12, and the two
    // headers total 54 bytes.
    let buffer = render(3, 3);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("padded.bmp");
    write_bmp(&path, &buffer).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 54 + 12 * 3);
    assert_eq!(image::open(&path).unwrap().to_rgb().dimensions(), (3, 3));
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let buffer = render(4, 4);
    let err = write_bmp(Path::new("/no-such-directory/plot.bmp"), &buffer).unwrap_err();
    match err {
        RenderError::Io(_) => (),
        other => panic!("expected an i/o error, got {}", other),
    }
}

#[test]
fn no_file_appears_when_the_write_fails() {
    let buffer = render(4, 4);
    let path = Path::new("/no-such-directory/plot.bmp");
    let _ = write_bmp(path, &buffer);
    assert!(!path.exists());
}

#[test]
fn mismatched_raw_buffer_is_an_encoding_error() {
    match PixelBuffer::from_raw(4, 4, vec![0; 7]) {
        Err(RenderError::Encoding { actual, expected }) => {
            assert_eq!(actual, 7);
            assert_eq!(expected, 48);
        }
        Err(other) => panic!("expected an encoding error, got {}", other),
        Ok(_) => panic!("a 7-byte buffer should not pass for a 4x4 image"),
    }
}
