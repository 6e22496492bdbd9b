//! Integration tests for mosaic crates.
//!
//! End-to-end checks across decode, pixelation, session state and encode.

#[cfg(test)]
mod golden;

#[cfg(test)]
mod tests {
    use mosaic_core::{pack, PixelBuffer};
    use mosaic_io::Format;
    use mosaic_ops::{pixelate, Partition, PixelateOptions};
    use mosaic_session::{PixelateWorker, Session, SessionError};
    use tempfile::tempdir;

    const RED: u32 = 0xFFFF_0000;
    const WHITE: u32 = 0xFFFF_FFFF;

    fn red_with_white_corner() -> PixelBuffer {
        let mut image = PixelBuffer::filled(4, 4, RED);
        image.set(0, 0, WHITE).unwrap();
        image
    }

    fn noise(width: u32, height: u32) -> PixelBuffer {
        // xorshift, deterministic
        let mut state = 0x2545_F491u32;
        let mut image = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                let [_, r, g, b] = state.to_be_bytes();
                image.set(x, y, pack(255, r, g, b)).unwrap();
            }
        }
        image
    }

    /// Load -> pixelate -> save -> reload keeps the exact pixels (PNG is lossless)
    #[test]
    fn test_pixelate_pipeline_png() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        mosaic_io::write(&input, &red_with_white_corner()).unwrap();

        let mut session = Session::new();
        session.load(&input).unwrap();
        session.pixelate(2).unwrap();
        session.save_as(&output, None).unwrap();

        let saved = mosaic_io::read(&output).unwrap();
        assert_eq!(saved.at(0, 0).unwrap(), 0xFFFF_1C1C);
        assert_eq!(saved.at(1, 1).unwrap(), 0xFFFF_1C1C);
        // overwritten by the overlapping neighbours
        assert_eq!(saved.at(2, 2).unwrap(), RED);
        assert_eq!(saved.at(3, 3).unwrap(), RED);
        assert_eq!(&saved, session.displayed().unwrap());
    }

    #[test]
    fn test_clean_partition_through_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.bmp");
        mosaic_io::write(&input, &red_with_white_corner()).unwrap();

        let mut session = Session::new();
        session.load(&input).unwrap();
        session
            .pixelate_with(PixelateOptions::new(2).with_partition(Partition::Clean))
            .unwrap();

        let out = session.displayed().unwrap();
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(out.at(x, y).unwrap(), 0xFFFF_4040);
        }
        assert_eq!(out.at(2, 2).unwrap(), RED);
    }

    /// Reset after several pixelations is bit-identical to the freshly loaded image
    #[test]
    fn test_reset_after_many_pixelations() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("noise.png");
        let image = noise(37, 23);
        mosaic_io::write(&input, &image).unwrap();

        let mut session = Session::new();
        session.load(&input).unwrap();
        for cs in [1, 2, 5, 10, 64] {
            session.pixelate(cs).unwrap();
        }
        assert!(session.is_pixelated());
        assert_eq!(session.cell_size(), Some(64));

        session.reset().unwrap();
        assert_eq!(session.displayed().unwrap(), &image);
        assert_eq!(session.original().unwrap(), &image);
    }

    #[test]
    fn test_cell_size_one_on_decoded_image() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("noise.png");
        mosaic_io::write(&input, &noise(16, 9)).unwrap();
        let image = mosaic_io::read(&input).unwrap();

        let clean = PixelateOptions::new(1).with_partition(Partition::Clean);
        assert_eq!(mosaic_ops::pixelate_with(&image, &clean).unwrap(), image);

        // Reference cells overlap, so the top-left pixel is the 2x2 mean
        let reference = pixelate(&image, 1).unwrap();
        let block = mosaic_ops::Cell { x0: 0, y0: 0, x1: 1, y1: 1 };
        let mean = mosaic_ops::pixelate::cell_average(&image, &block).unwrap();
        assert_eq!(reference.at(0, 0).unwrap(), mean);
        assert_eq!(reference.at(15, 8).unwrap(), image.at(15, 8).unwrap());
    }

    #[test]
    fn test_cell_larger_than_image_is_single_average() {
        let image = noise(7, 5);
        let out = pixelate(&image, 100).unwrap();
        let first = out.at(0, 0).unwrap();
        assert!(out.pixels().iter().all(|&p| p == first));
    }

    #[test]
    fn test_reload_replaces_state() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.bmp");
        mosaic_io::write(&a, &noise(8, 8)).unwrap();
        mosaic_io::write(&b, &PixelBuffer::filled(3, 5, RED)).unwrap();

        let mut session = Session::new();
        session.load(&a).unwrap();
        session.pixelate(4).unwrap();
        session.load(&b).unwrap();

        assert!(!session.is_pixelated());
        assert_eq!(session.displayed().unwrap().dimensions(), (3, 5));
        assert_eq!(session.path(), Some(b.as_path()));
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_corrupt_file_keeps_previous_image() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.png");
        let bad = dir.path().join("bad.png");
        mosaic_io::write(&good, &red_with_white_corner()).unwrap();
        std::fs::write(&bad, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        let mut session = Session::new();
        session.load(&good).unwrap();
        let err = session.load(&bad).unwrap_err();
        assert!(matches!(err, SessionError::Io(_)));
        assert!(err.is_user_facing());
        assert_eq!(session.path(), Some(good.as_path()));
        assert_eq!(session.displayed().unwrap(), &red_with_white_corner());
    }

    #[test]
    fn test_save_with_explicit_format() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("pixelated.out");

        let mut session = Session::new();
        session.load_buffer(noise(12, 12), None);
        session.pixelate(3).unwrap();
        session.save_as(&output, Some(Format::Png)).unwrap();

        assert_eq!(Format::detect(&output).unwrap(), Format::Png);
        assert_eq!(&mosaic_io::read(&output).unwrap(), session.displayed().unwrap());
    }

    #[test]
    fn test_jpeg_export_keeps_dimensions() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("pixelated.jpg");

        let mut session = Session::new();
        session.load_buffer(noise(40, 24), None);
        session.pixelate(8).unwrap();
        session.save_as(&output, None).unwrap();

        let loaded = mosaic_io::read(&output).unwrap();
        assert_eq!(loaded.dimensions(), (40, 24));
        assert!(!loaded.has_alpha());
    }

    #[test]
    fn test_worker_discards_result_after_reload() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        mosaic_io::write(&a, &noise(64, 64)).unwrap();
        mosaic_io::write(&b, &red_with_white_corner()).unwrap();

        let mut session = Session::new();
        let mut worker = PixelateWorker::spawn().unwrap();

        session.load(&a).unwrap();
        worker.submit(&session, PixelateOptions::new(8)).unwrap();
        session.load(&b).unwrap();

        assert!(!worker.wait(&mut session).unwrap());
        assert_eq!(session.displayed().unwrap(), &red_with_white_corner());

        worker.submit(&session, PixelateOptions::new(2)).unwrap();
        assert!(worker.wait(&mut session).unwrap());
        assert_eq!(session.displayed().unwrap().at(0, 0).unwrap(), 0xFFFF_1C1C);
    }
}
