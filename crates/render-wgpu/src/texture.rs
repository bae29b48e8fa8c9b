use crate::RenderError;
use std::path::Path;

/// Decoded RGBA8 pixels, bottom row first so `uv (0, 0)` is the image's
/// bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Byte length of a tightly packed RGBA8 image.
fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

impl TextureImage {
    /// Decode an image file (png or jpeg).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| RenderError::Texture {
                path: path.to_path_buf(),
                source,
            })?
            .flipv()
            .into_rgba8();

        let (width, height) = img.dimensions();
        tracing::debug!("loaded texture {} ({width}x{height})", path.display());

        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Load `path` when configured, otherwise build the fallback.
    pub fn load_or_else(
        path: Option<&Path>,
        fallback: impl FnOnce() -> Self,
    ) -> Result<Self, RenderError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(fallback()),
        }
    }

    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let rgba = color
            .iter()
            .copied()
            .cycle()
            .take(rgba_len(width, height))
            .collect();
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Square checkerboard of `cells x cells` tiles.
    pub fn checker(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = (size / cells.max(1)).max(1);
        let mut rgba = Vec::with_capacity(rgba_len(size, size));
        for y in 0..size {
            for x in 0..size {
                let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
                rgba.extend_from_slice(&color);
            }
        }
        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// Procedural stand-in for the crate texture.
    pub fn default_base() -> Self {
        Self::checker(64, 8, [150, 111, 51, 255], [110, 78, 35, 255])
    }

    /// Fully transparent overlay, leaves the base texture untouched.
    pub fn default_overlay() -> Self {
        Self::solid(1, 1, [0, 0, 0, 0])
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ]
    }
}

/// A texture resident on the GPU.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl GpuTexture {
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &TextureImage,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fills_every_pixel() {
        let img = TextureImage::solid(3, 2, [1, 2, 3, 4]);
        assert_eq!(img.rgba.len(), 3 * 2 * 4);
        assert_eq!(img.pixel(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn checker_alternates_cells() {
        let a = [255, 0, 0, 255];
        let b = [0, 0, 255, 255];
        let img = TextureImage::checker(8, 2, a, b);
        assert_eq!(img.pixel(0, 0), a);
        assert_eq!(img.pixel(4, 0), b);
        assert_eq!(img.pixel(0, 4), b);
        assert_eq!(img.pixel(7, 7), a);
    }

    #[test]
    fn default_overlay_is_transparent() {
        assert_eq!(TextureImage::default_overlay().pixel(0, 0)[3], 0);
        let base = TextureImage::default_base();
        assert_eq!((base.width, base.height), (64, 64));
    }

    #[test]
    fn load_png_flips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two_rows.png");
        let mut src = image::RgbaImage::new(1, 2);
        src.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        src.put_pixel(0, 1, image::Rgba([0, 255, 0, 255]));
        src.save(&path).unwrap();

        let img = TextureImage::load(&path).unwrap();
        assert_eq!((img.width, img.height), (1, 2));
        // Bottom row of the file comes first.
        assert_eq!(img.pixel(0, 0), [0, 255, 0, 255]);
        assert_eq!(img.pixel(0, 1), [255, 0, 0, 255]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = TextureImage::load("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, RenderError::Texture { .. }));
        assert!(err.to_string().contains("not/here.png"));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn rgba_len_does_not_wrap_in_u32() {
        // 40_000 * 40_000 * 4 exceeds u32::MAX.
        assert_eq!(rgba_len(40_000, 40_000), 6_400_000_000);
        assert_eq!(rgba_len(0, 7), 0);
    }

    #[test]
    fn empty_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();
        let err = TextureImage::load(&path).unwrap_err();
        assert!(matches!(err, RenderError::Texture { .. }));
    }

    #[test]
    fn load_or_else_uses_fallback_without_path() {
        let img = TextureImage::load_or_else(None, TextureImage::default_overlay).unwrap();
        assert_eq!(img, TextureImage::default_overlay());
    }
}
