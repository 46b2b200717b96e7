//! Lossy WebP encoding via libwebp.
//!
//! Quality is caller-controlled; the compression effort is pinned to the
//! encoder's maximum so output size wins over encode speed.

use image::DynamicImage;
use pixelforged_common::{Error, Result};
use std::path::Path;
use webp::{Encoder, WebPConfig};

/// libwebp compression method; 6 is the slowest, best-compressing setting.
const COMPRESSION_METHOD: i32 = 6;

/// Encode `img` as lossy WebP at the given quality and write it to `path`.
///
/// The image must be 8-bit RGB or RGBA; the converter always hands this
/// function RGB-normalized data.
pub fn write_webp(img: &DynamicImage, quality: u8, path: &Path) -> Result<()> {
    let encoder = Encoder::from_image(img).map_err(Error::encode)?;

    let mut config =
        WebPConfig::new().map_err(|()| Error::encode("libwebp rejected default config"))?;
    config.quality = f32::from(quality);
    config.method = COMPRESSION_METHOD;

    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| Error::encode(format!("{:?}", e)))?;

    std::fs::write(path, &*encoded)?;
    Ok(())
}
