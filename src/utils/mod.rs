use image::{codecs::png::PngEncoder, DynamicImage, GenericImageView, Rgb};
use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind, Write};
use std::path::Path;


/// Linear blend between two colors, `t` in `[0, 1]`.
pub fn color_ramp(low: [u8; 3], high: [u8; 3], t: f64) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let channel = |i: usize| (low[i] as f64 + (high[i] as f64 - low[i] as f64) * t).round() as u8;

    Rgb([channel(0), channel(1), channel(2)])
}

pub fn encode_png(
    file_path: &Path,
    img: &DynamicImage,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut writer = BufWriter::new(File::create(file_path)?);
    let encoder = PngEncoder::new(&mut writer);

    let dim = img.dimensions();
    encoder
        .encode(&img.to_bytes(), dim.0, dim.1, img.color())
        .map_err(|err| Error::new(ErrorKind::Other, err.to_string()))?;
    writer.flush()?;

    Ok(())
}
