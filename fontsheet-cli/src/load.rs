//! Decoding of font sheet images into single-channel samples.

use std::path::Path;

use anyhow::{Context, Result};
use fontsheet::image::SampleImage;
use fontsheet::types::Channel;

/// Decode an image file and keep one sample per pixel from `channel`.
pub fn load_sheet(path: &Path, channel: Channel) -> Result<SampleImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image: {}", path.display()))?;

    let (width, height, samples) = match channel {
        Channel::Green => {
            let rgb = img.into_rgb8();
            let (width, height) = rgb.dimensions();
            let samples = rgb.pixels().map(|p| p.0[1]).collect();
            (width, height, samples)
        }
        Channel::Luma => {
            let luma = img.into_luma8();
            let (width, height) = luma.dimensions();
            (width, height, luma.into_raw())
        }
    };

    Ok(SampleImage::from_raw(width, height, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontsheet::encode::encode_image;
    use fontsheet::sheet::{SheetBuilder, INK};
    use fontsheet::types::EncodeOptions;
    use std::path::PathBuf;

    fn temp_png(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("png2c-{}-{}.png", std::process::id(), name))
    }

    fn write_png(path: &Path, width: u32, height: u32, color: png::ColorType, data: &[u8]) {
        let file = std::fs::File::create(path).unwrap();
        let w = std::io::BufWriter::new(file);
        let mut encoder = png::Encoder::new(w, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }

    #[test]
    fn grayscale_png_round_trips_through_encoder() {
        let sheet = SheetBuilder::new(8, 8).fill_glyph(65, INK).build();
        let path = temp_png("gray");
        write_png(&path, sheet.width, sheet.height, png::ColorType::Grayscale, &sheet.buf);

        let loaded = load_sheet(&path, Channel::Green).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!((loaded.width, loaded.height), (128, 128));
        assert_eq!(loaded.buf, sheet.buf);

        let font = encode_image(&loaded, &EncodeOptions::default()).unwrap();
        assert!(font.glyph(65).lines.iter().all(|l| l.bytes[0] == 0xFF));
        assert!(font.glyph(64).lines.iter().all(|l| l.bytes[0] == 0x00));
    }

    #[test]
    fn green_channel_selects_g_component() {
        // pure green is ink, pure red and white-ish without full green are not
        let pixels: [[u8; 3]; 4] = [[0, 255, 0], [255, 0, 0], [255, 254, 255], [255, 255, 255]];
        let data: Vec<u8> = pixels.iter().flatten().copied().collect();
        let path = temp_png("rgb");
        write_png(&path, 4, 1, png::ColorType::Rgb, &data);

        let loaded = load_sheet(&path, Channel::Green).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.buf, vec![255, 0, 254, 255]);
    }

    #[test]
    fn luma_channel_converts_color() {
        let data = [255u8, 255, 255, 0, 0, 0];
        let path = temp_png("luma");
        write_png(&path, 2, 1, png::ColorType::Rgb, &data);

        let loaded = load_sheet(&path, Channel::Luma).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.buf, vec![255, 0]);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = temp_png("missing");
        let err = load_sheet(&path, Channel::Green).unwrap_err();
        assert!(format!("{err:#}").contains("failed to open image"));
    }
}
