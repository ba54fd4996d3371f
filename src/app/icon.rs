//! Loads the eye bitmap used for the object and image markers.
//! A missing or unreadable file is not an error; callers fall back to
//! plain text labels when no texture is available.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

pub const EYE_ICON_PATH: &str = "resource/eye.png";

pub struct EyeIcons {
    /// Icon as stored on disk, used for the object marker.
    pub forward: Option<TextureHandle>,
    /// Horizontally flipped variant, used for the image marker.
    pub mirrored: Option<TextureHandle>,
}

impl EyeIcons {
    pub fn load(ctx: &Context) -> Self {
        Self::load_from(ctx, EYE_ICON_PATH)
    }

    pub fn load_from(ctx: &Context, path: &str) -> Self {
        match image::open(path) {
            Ok(decoded) => EyeIcons {
                forward: Some(upload(ctx, "eye", &decoded)),
                mirrored: Some(upload(ctx, "eye-mirrored", &decoded.fliph())),
            },
            Err(err) => {
                log::warn!("could not load eye icon from {path}: {err}");
                EyeIcons::missing()
            }
        }
    }

    pub fn missing() -> Self {
        EyeIcons {
            forward: None,
            mirrored: None,
        }
    }
}

fn upload(ctx: &Context, name: &str, decoded: &image::DynamicImage) -> TextureHandle {
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let colour_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    ctx.load_texture(name, colour_image, TextureOptions::LINEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_degrades_to_no_textures() {
        let ctx = Context::default();
        let icons = EyeIcons::load_from(&ctx, "resource/does-not-exist.png");
        assert!(icons.forward.is_none());
        assert!(icons.mirrored.is_none());
    }
}
