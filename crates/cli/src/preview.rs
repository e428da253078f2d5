use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use videocrop_core::crop::domain::draw_command::DrawCommand;
use videocrop_core::shared::color::Color;
use videocrop_core::shared::frame::Frame;
use videocrop_core::shared::overlay::Overlay;
use videocrop_core::shared::pixel_box::PixelBox;

use crate::scene::Texture;

/// Side of one checker square, in frame pixels.
const CHECKER_SIZE: f32 = 32.0;
const CHECKER_LIGHT: Color = Color::rgba(200, 200, 200, 255);
const CHECKER_DARK: Color = Color::rgba(90, 90, 90, 255);

/// Largest canvas side the preview will allocate, in pixels.
pub const MAX_PREVIEW_SIDE: u32 = 16384;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PreviewError {
    #[error("allocation far corner ({x2}, {y2}) is not finite")]
    NonFinite { x2: f32, y2: f32 },
    #[error("preview canvas {width}x{height} exceeds the {max} pixel side limit")]
    TooLarge { width: f32, height: f32, max: u32 },
}

/// Rasterises draw commands into an RGBA canvas sized to the allocation's
/// far corner.
///
/// A pixel is covered by a command when its centre lies inside the
/// destination box. Textured commands sample nearest-neighbour and are
/// blended source-over with their opacity.
pub fn render(
    commands: &[DrawCommand],
    allocation: &PixelBox,
    frame: Option<&Frame<'_, Texture>>,
    overlays: &[Overlay<'_, Texture>],
) -> Result<RgbaImage, PreviewError> {
    let (width, height) = canvas_size(allocation)?;
    let mut canvas = RgbaImage::new(width, height);

    for command in commands {
        match command {
            DrawCommand::BorderFill { dest, color, .. } => {
                fill(&mut canvas, dest, |_, _| *color);
            }
            DrawCommand::MainFrame {
                dest,
                tex_coords,
                state,
            } => {
                let Some(frame) = frame else { continue };
                let (fw, fh) = frame.resolution().as_f32();
                let tex = PixelBox::new(
                    tex_coords.x1(),
                    tex_coords.y1(),
                    tex_coords.x2(),
                    tex_coords.y2(),
                );
                fill(&mut canvas, dest, |u, v| {
                    let (s, t) = lerp_tex(&tex, u, v);
                    modulate(sample(frame.texture(), s, t, fw, fh), state.opacity)
                });
            }
            DrawCommand::Overlay {
                index,
                dest,
                tex_coords,
                state,
            } => {
                let Some(overlay) = overlays.get(*index) else {
                    log::warn!("Draw command references missing overlay {index}");
                    continue;
                };
                let position = overlay.position();
                fill(&mut canvas, dest, |u, v| {
                    let (s, t) = lerp_tex(tex_coords, u, v);
                    let texel = sample(overlay.texture(), s, t, position.width(), position.height());
                    modulate(texel, state.opacity)
                });
            }
        }
    }

    Ok(canvas)
}

/// Canvas dimensions covering the allocation's far corner, at least 1x1.
fn canvas_size(allocation: &PixelBox) -> Result<(u32, u32), PreviewError> {
    let (x2, y2) = (allocation.x2, allocation.y2);
    if !x2.is_finite() || !y2.is_finite() {
        return Err(PreviewError::NonFinite { x2, y2 });
    }
    let width = x2.ceil().max(1.0);
    let height = y2.ceil().max(1.0);
    let max = MAX_PREVIEW_SIDE as f32;
    if width > max || height > max {
        return Err(PreviewError::TooLarge {
            width,
            height,
            max: MAX_PREVIEW_SIDE,
        });
    }
    Ok((width as u32, height as u32))
}

pub fn save(canvas: &RgbaImage, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    canvas.save(path)?;
    Ok(())
}

/// Visits every canvas pixel whose centre lies in `dest`, passing the
/// centre's fractional position within `dest`.
fn fill(canvas: &mut RgbaImage, dest: &PixelBox, mut shade: impl FnMut(f32, f32) -> Color) {
    if dest.is_empty() {
        return;
    }
    let x_start = (dest.x1 - 0.5).ceil().max(0.0) as u32;
    let y_start = (dest.y1 - 0.5).ceil().max(0.0) as u32;
    let x_end = ((dest.x2 - 0.5).ceil().max(0.0) as u32).min(canvas.width());
    let y_end = ((dest.y2 - 0.5).ceil().max(0.0) as u32).min(canvas.height());

    for y in y_start..y_end {
        let v = (y as f32 + 0.5 - dest.y1) / dest.height();
        for x in x_start..x_end {
            let u = (x as f32 + 0.5 - dest.x1) / dest.width();
            let color = shade(u, v);
            blend(canvas.get_pixel_mut(x, y), color);
        }
    }
}

fn lerp_tex(tex: &PixelBox, u: f32, v: f32) -> (f32, f32) {
    (tex.x1 + tex.width() * u, tex.y1 + tex.height() * v)
}

/// Samples a texture at normalised `(s, t)`. `width`/`height` give the
/// texture's nominal pixel size for procedural textures.
fn sample(texture: &Texture, s: f32, t: f32, width: f32, height: f32) -> Color {
    match texture {
        Texture::Solid(color) => *color,
        Texture::Checker => {
            let cx = (s * width / CHECKER_SIZE).floor() as i64;
            let cy = (t * height / CHECKER_SIZE).floor() as i64;
            if (cx + cy) % 2 == 0 {
                CHECKER_LIGHT
            } else {
                CHECKER_DARK
            }
        }
        Texture::Image(img) => {
            let x = ((s * img.width() as f32) as u32).min(img.width().saturating_sub(1));
            let y = ((t * img.height() as f32) as u32).min(img.height().saturating_sub(1));
            let [r, g, b, a] = img.get_pixel(x, y).0;
            Color::rgba(r, g, b, a)
        }
    }
}

/// Scales a texel's own alpha by the command opacity.
fn modulate(texel: Color, opacity: u8) -> Color {
    let alpha = (texel.alpha as u16 * opacity as u16 / 255) as u8;
    texel.with_alpha(alpha)
}

/// Source-over blend of `color` onto `dst`.
fn blend(dst: &mut Rgba<u8>, color: Color) {
    let alpha = color.alpha as u32;
    let inv = 255 - alpha;
    let [r, g, b, a] = dst.0;
    let mix = |src: u8, dst: u8| ((src as u32 * alpha + dst as u32 * inv + 127) / 255) as u8;
    *dst = Rgba([
        mix(color.red, r),
        mix(color.green, g),
        mix(color.blue, b),
        (alpha + (a as u32 * inv + 127) / 255).min(255) as u8,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use videocrop_core::crop::domain::crop_config::CropConfig;
    use videocrop_core::crop::domain::region_mapper::compute_draw_commands;
    use videocrop_core::shared::color::ActorAppearance;
    use videocrop_core::shared::frame::VideoResolution;

    const RED: Color = Color::rgba(255, 0, 0, 255);

    fn appearance() -> ActorAppearance {
        ActorAppearance {
            background: Color::rgba(0, 0, 255, 255),
            paint_opacity: 255,
        }
    }

    #[test]
    fn test_canvas_matches_allocation() {
        let allocation = PixelBox::from_size(32.0, 24.0);
        let canvas = render(&[], &allocation, None, &[]).unwrap();
        assert_eq!(canvas.dimensions(), (32, 24));
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_pillarbox_borders_and_frame() {
        let allocation = PixelBox::from_size(32.0, 24.0);
        let mut config = CropConfig::new();
        config.set_output_region([0.25, 0.0, 0.75, 1.0]).unwrap();
        config.set_paint_borders(true);
        let texture = Texture::Solid(RED);
        let frame = Frame::new(VideoResolution::new(64, 48), &texture);

        let commands = compute_draw_commands(allocation, Some(&frame), &config, &[], &appearance());
        let canvas = render(&commands, &allocation, Some(&frame), &[]).unwrap();

        assert_eq!(canvas.get_pixel(0, 12).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(7, 12).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(8, 12).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(23, 12).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(24, 12).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(31, 23).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_frame_image_is_sampled_through_crop() {
        // Left half red, right half green; crop keeps only the right half.
        let mut img = RgbaImage::new(4, 2);
        for (x, _, px) in img.enumerate_pixels_mut() {
            *px = if x < 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 255])
            };
        }
        let texture = Texture::Image(img);
        let frame = Frame::new(VideoResolution::new(4, 2), &texture);
        let mut config = CropConfig::new();
        config.set_input_region([0.5, 0.0, 1.0, 1.0]).unwrap();
        let allocation = PixelBox::from_size(8.0, 8.0);

        let commands = compute_draw_commands(allocation, Some(&frame), &config, &[], &appearance());
        let canvas = render(&commands, &allocation, Some(&frame), &[]).unwrap();

        assert!(canvas.pixels().all(|p| p.0 == [0, 255, 0, 255]));
    }

    #[test]
    fn test_overlay_is_blended_on_top() {
        let frame_texture = Texture::Solid(Color::rgba(0, 0, 0, 255));
        let overlay_texture = Texture::Solid(Color::rgba(255, 255, 255, 255));
        let frame = Frame::new(VideoResolution::new(16, 16), &frame_texture);
        let overlays = [Overlay::new(&overlay_texture, PixelBox::new(0.0, 0.0, 8.0, 8.0))];
        let allocation = PixelBox::from_size(16.0, 16.0);
        let config = CropConfig::new();

        let commands =
            compute_draw_commands(allocation, Some(&frame), &config, &overlays, &appearance());
        let canvas = render(&commands, &allocation, Some(&frame), &overlays).unwrap();

        assert_eq!(canvas.get_pixel(2, 2).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(12, 12).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_translucent_frame_keeps_texel_alpha() {
        let texture = Texture::Solid(Color::rgba(255, 255, 255, 128));
        let frame = Frame::new(VideoResolution::new(4, 4), &texture);
        let allocation = PixelBox::from_size(4.0, 4.0);
        let config = CropConfig::new();

        let commands = compute_draw_commands(allocation, Some(&frame), &config, &[], &appearance());
        let canvas = render(&commands, &allocation, Some(&frame), &[]).unwrap();

        // Half-transparent white onto an empty canvas, not opaque white.
        assert_eq!(canvas.get_pixel(1, 1).0, [128, 128, 128, 128]);
    }

    #[test]
    fn test_modulate_multiplies_alpha() {
        assert_eq!(modulate(Color::rgba(9, 9, 9, 128), 255).alpha, 128);
        assert_eq!(modulate(Color::rgba(9, 9, 9, 255), 128).alpha, 128);
        assert_eq!(modulate(Color::rgba(9, 9, 9, 128), 128).alpha, 64);
        assert_eq!(modulate(Color::rgba(9, 9, 9, 255), 0).alpha, 0);
    }

    #[test]
    fn test_oversized_allocation_is_rejected() {
        let allocation = PixelBox::from_size(1.0e10, 1.0e10);
        let err = render(&[], &allocation, None, &[]).unwrap_err();
        assert!(matches!(err, PreviewError::TooLarge { max: MAX_PREVIEW_SIDE, .. }));
    }

    #[test]
    fn test_non_finite_allocation_is_rejected() {
        let allocation = PixelBox::new(0.0, 0.0, f32::INFINITY, 24.0);
        let err = render(&[], &allocation, None, &[]).unwrap_err();
        assert!(matches!(err, PreviewError::NonFinite { .. }));

        let allocation = PixelBox::new(0.0, 0.0, 32.0, f32::NAN);
        assert!(render(&[], &allocation, None, &[]).is_err());
    }

    #[test]
    fn test_largest_allowed_side_is_accepted() {
        let allocation = PixelBox::from_size(MAX_PREVIEW_SIDE as f32, 1.0);
        let canvas = render(&[], &allocation, None, &[]).unwrap();
        assert_eq!(canvas.dimensions(), (MAX_PREVIEW_SIDE, 1));
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut px = Rgba([0, 0, 0, 255]);
        blend(&mut px, Color::rgba(255, 255, 255, 128));
        assert_eq!(px.0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_checker_alternates() {
        let a = sample(&Texture::Checker, 0.0, 0.0, 64.0, 64.0);
        let b = sample(&Texture::Checker, 0.75, 0.0, 64.0, 64.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preview.png");
        let canvas = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        save(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(3, 3).0, [1, 2, 3, 255]);
    }
}
