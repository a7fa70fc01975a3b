#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use img_to_ico::pipeline::{Padding, SourceImage, compose_square};
    use img_to_ico::{Converter, ErrorKind, SourceFormat, read_icon_dir};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();
        path
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([20, 140, 220, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    fn embedded_png(ico: &[u8]) -> RgbaImage {
        let dir = read_icon_dir(ico).unwrap();
        assert_eq!(dir.entries.len(), 1);
        assert!(dir.is_png(0));
        image::load_from_memory_with_format(dir.image_data(0).unwrap(), ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_jpeg_photo_becomes_ico_next_to_it() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_jpeg(dir.path(), "photo.jpg", 800, 600);

        let report = Converter::new().convert(&input).unwrap();

        let expected = dir.path().join("photo.ico");
        assert_eq!(report.output, expected);
        assert_eq!(report.format, SourceFormat::Jpeg);
        assert_eq!((report.source_width, report.source_height), (800, 600));
        assert_eq!(report.padding, Padding { top: 100, left: 0 });

        let ico = fs::read(&expected).unwrap();
        assert_eq!(ico.len(), report.ico_len());
        let png = embedded_png(&ico);
        assert_eq!(png.dimensions(), (256, 256));
    }

    #[test]
    fn test_jpeg_extension_variant() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_jpeg(dir.path(), "scan.jpeg", 40, 30);

        let report = Converter::new().convert(&input).unwrap();
        assert_eq!(report.output, dir.path().join("scan.ico"));
        assert!(report.output.exists());
    }

    #[test]
    fn test_square_png_is_upscaled_without_padding() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "icon.png", 64, 64);

        let report = Converter::new().convert(&input).unwrap();
        assert!(report.padding.is_zero());

        let png = embedded_png(&fs::read(&report.output).unwrap());
        assert_eq!(png.dimensions(), (256, 256));
        assert!(png.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("image.bmp");
        RgbImage::new(4, 4)
            .save_with_format(&input, ImageFormat::Bmp)
            .unwrap();

        let err = Converter::new().convert(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
        assert!(!dir.path().join("image.ico").exists());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ghost.png");

        let err = Converter::new().convert(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputMissing);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_corrupt_input_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.jpg");
        fs::write(&input, b"\xFF\xD8 not really a jpeg").unwrap();

        let err = Converter::new().convert(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(!dir.path().join("broken.ico").exists());
    }

    #[test]
    fn test_wide_source_occupies_center_rows() {
        let source = SourceImage::from_rgba(
            RgbaImage::from_pixel(1000, 100, Rgba([255, 0, 0, 255])),
            SourceFormat::Png,
        );
        let canvas = compose_square(&source);

        assert_eq!(canvas.side(), 1000);
        assert_eq!(canvas.padding(), Padding { top: 450, left: 0 });
        for x in [0, 500, 999] {
            assert_eq!(canvas.pixels().get_pixel(x, 449)[3], 0);
            assert_eq!(canvas.pixels().get_pixel(x, 450)[3], 255);
            assert_eq!(canvas.pixels().get_pixel(x, 549)[3], 255);
            assert_eq!(canvas.pixels().get_pixel(x, 550)[3], 0);
        }
    }

    #[test]
    fn test_embedded_png_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "wide.png", 300, 120);
        let output = dir.path().join("wide.ico");

        let converter = Converter::new();
        let validated = converter.validate(&input).unwrap();
        let rendered = converter.render(&validated).unwrap();
        converter.write(&validated, &rendered, &output).unwrap();

        let png = embedded_png(&fs::read(&output).unwrap());
        assert_eq!(&png, rendered.bitmap.pixels());
    }

    #[test]
    fn test_header_fields() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "tall.png", 10, 70);

        let report = Converter::new().convert(&input).unwrap();
        let ico = fs::read(&report.output).unwrap();

        assert_eq!(ico.len(), 22 + report.png_len());
        assert_eq!(&ico[0..2], &[0x00, 0x00]);
        assert_eq!(&ico[2..4], &[0x01, 0x00]);
        assert_eq!(&ico[4..6], &[0x01, 0x00]);
        assert_eq!((ico[6], ico[7], ico[8], ico[9]), (0, 0, 0, 0));
        assert_eq!(u16::from_le_bytes([ico[10], ico[11]]), 1);
        assert_eq!(u16::from_le_bytes([ico[12], ico[13]]), 32);
        assert_eq!(
            u32::from_le_bytes([ico[14], ico[15], ico[16], ico[17]]) as usize,
            report.png_len()
        );
        assert_eq!(u32::from_le_bytes([ico[18], ico[19], ico[20], ico[21]]), 22);
    }

    #[test]
    fn test_explicit_output_path_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "logo.png", 32, 16);
        let output = dir.path().join("custom-name.ico");
        fs::write(&output, vec![0u8; 1 << 20]).unwrap();

        let report = Converter::new().convert_to(&input, &output).unwrap();
        assert_eq!(report.output, output);
        assert!(!dir.path().join("logo.ico").exists());
        assert_eq!(fs::metadata(&output).unwrap().len() as usize, report.ico_len());
    }

    #[test]
    fn test_converter_is_reusable_across_threads() {
        let dir = tempfile::tempdir().unwrap();
        let inputs: Vec<_> = (0..4)
            .map(|i| write_png(dir.path(), &format!("icon{i}.png"), 16 + i, 24))
            .collect();

        let converter = Converter::new();
        std::thread::scope(|scope| {
            for input in &inputs {
                scope.spawn(move || converter.convert(input).unwrap());
            }
        });

        for input in &inputs {
            assert!(input.with_extension("ico").exists());
        }
    }
}
