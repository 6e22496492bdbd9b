//! Golden pixel tests.
//!
//! A small deterministic gradient is pixelated under both partitions and
//! compared against hand-checked expected buffers. Cells overlap under
//! [`Partition::Reference`], so the last column band and the bottom row band
//! come out differently from [`Partition::Clean`].

use mosaic_core::{pack, PixelBuffer};
use mosaic_ops::{pixelate_with, Partition, PixelateOptions};

/// 5x3 ramp: red follows x, green follows y, blue follows x + y.
fn ramp_5x3() -> PixelBuffer {
    let mut image = PixelBuffer::new(5, 3);
    for y in 0..3u32 {
        for x in 0..5u32 {
            let (xr, yg, b) = (x * 50, y * 100, (x + y) * 20);
            image.set(x, y, pack(255, xr as u8, yg as u8, b as u8)).unwrap();
        }
    }
    image
}

fn expected(rows: [[u32; 5]; 3]) -> PixelBuffer {
    PixelBuffer::from_pixels(5, 3, rows.concat()).unwrap()
}

#[test]
fn golden_reference_partition() {
    let out = pixelate_with(&ramp_5x3(), &PixelateOptions::new(2)).unwrap();
    let want = expected([
        [0xFF32_6428, 0xFF32_6428, 0xFF96_6450, 0xFF96_6450, 0xFFC8_6464],
        [0xFF32_6428, 0xFF32_6428, 0xFF96_6450, 0xFF96_6450, 0xFFC8_6464],
        [0xFF32_C83C, 0xFF32_C83C, 0xFF96_C864, 0xFF96_C864, 0xFFC8_C878],
    ]);
    assert_eq!(out, want);
}

#[test]
fn golden_clean_partition() {
    let opts = PixelateOptions::new(2).with_partition(Partition::Clean);
    let out = pixelate_with(&ramp_5x3(), &opts).unwrap();
    let want = expected([
        [0xFF19_3214, 0xFF19_3214, 0xFF7D_323C, 0xFF7D_323C, 0xFFC8_325A],
        [0xFF19_3214, 0xFF19_3214, 0xFF7D_323C, 0xFF7D_323C, 0xFFC8_325A],
        [0xFF19_C832, 0xFF19_C832, 0xFF7D_C85A, 0xFF7D_C85A, 0xFFC8_C878],
    ]);
    assert_eq!(out, want);
}

#[test]
fn golden_partitions_agree_on_last_pixel() {
    // The bottom-right cell is a single pixel under both rules
    let src = ramp_5x3();
    let reference = pixelate_with(&src, &PixelateOptions::new(2)).unwrap();
    let clean =
        pixelate_with(&src, &PixelateOptions::new(2).with_partition(Partition::Clean)).unwrap();
    assert_eq!(reference.at(4, 2).unwrap(), src.at(4, 2).unwrap());
    assert_eq!(clean.at(4, 2).unwrap(), src.at(4, 2).unwrap());
}
