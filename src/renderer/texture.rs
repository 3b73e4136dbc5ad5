use anyhow::{Context, Result};
use gl::types::*;
use std::path::Path;

/// Decoded RGBA8 pixels ready for GL upload.
#[derive(Debug)]
pub struct PixelData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file (PNG, JPG) into tightly packed RGBA8.
pub fn decode_image(path: &Path) -> Result<PixelData> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load texture: {}", path.display()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// GL 2D texture, REPEAT wrap on both axes. The ball's u coordinate spans
/// [0.5, 1.5], so sampling depends on the wrap mode.
pub struct Texture {
    id: GLuint,
}

impl Texture {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = decode_image(path)?;
        log::info!(
            "loaded texture {} ({}x{})",
            path.display(),
            data.width,
            data.height
        );
        Ok(Self::from_pixels(&data))
    }

    pub fn from_pixels(data: &PixelData) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as GLint,
                data.width as GLsizei,
                data.height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                data.pixels.as_ptr() as *const _,
            );
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }

        Self { id }
    }

    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_round_trips_dimensions_and_stride() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.png");

        let mut img = image::RgbaImage::new(8, 4);
        for (x, y, p) in img.enumerate_pixels_mut() {
            let on = (x + y) % 2 == 0;
            *p = image::Rgba(if on { [255, 255, 255, 255] } else { [0, 0, 0, 255] });
        }
        img.save(&path).unwrap();

        let data = decode_image(&path).unwrap();
        assert_eq!(data.width, 8);
        assert_eq!(data.height, 4);
        assert_eq!(data.pixels.len(), 8 * 4 * 4);
        assert_eq!(&data.pixels[0..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn decode_missing_file_reports_the_path() {
        let err = decode_image(Path::new("/no/such/ball.png")).unwrap_err();
        assert!(err.to_string().contains("/no/such/ball.png"));
    }
}
