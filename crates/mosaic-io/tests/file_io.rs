use mosaic_core::{pack, PixelBuffer};
use mosaic_io::{read, read_from_memory, write, write_as, Format, ImageWriter, IoError};
use tempfile::tempdir;

fn checker(width: u32, height: u32) -> PixelBuffer {
    let mut image = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 240 } else { 16 };
            image.set(x, y, pack(255, v, v / 2, 255 - v)).unwrap();
        }
    }
    image
}

#[test]
fn png_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("checker.png");
    let image = checker(9, 7);

    write(&path, &image).expect("write png");
    assert_eq!(Format::detect(&path).unwrap(), Format::Png);
    assert_eq!(read(&path).expect("read png"), image);
}

#[test]
fn bmp_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("checker.bmp");
    let image = checker(6, 4);

    write(&path, &image).expect("write bmp");
    assert_eq!(read(&path).expect("read bmp"), image);
}

#[test]
fn jpeg_keeps_dimensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("flat.jpeg");
    let image = PixelBuffer::filled(33, 17, 0xFF20_6080);

    write(&path, &image).expect("write jpeg");
    let loaded = read(&path).expect("read jpeg");
    assert_eq!(loaded.dimensions(), (33, 17));
}

#[test]
fn format_detected_from_content_not_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mislabeled.jpg");
    let image = checker(4, 4);

    write_as(&path, &image, Format::Png).unwrap();
    assert_eq!(Format::detect(&path).unwrap(), Format::Png);
    assert_eq!(read(&path).unwrap(), image);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = read(dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, IoError::NotFound(_)));
    assert!(err.is_decode_error());
}

#[test]
fn unknown_format_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"plain text, not pixels").unwrap();

    let err = read(&path).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(ref ext) if ext == "txt"));

    let err = write(dir.path().join("out.tga"), &checker(2, 2)).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(_)));
}

#[test]
fn memory_decode_dispatch() {
    let image = checker(3, 3);
    let bytes = mosaic_io::png::PngCodec.write_to_memory(&image).unwrap();
    assert_eq!(read_from_memory(&bytes).unwrap(), image);
    assert!(read_from_memory(b"????").is_err());
}
