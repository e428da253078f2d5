use crate::shared::color::ActorAppearance;
use crate::shared::frame::Frame;
use crate::shared::normalized_box::NormalizedBox;
use crate::shared::overlay::Overlay;
use crate::shared::pixel_box::PixelBox;

use super::crop_config::CropConfig;
use super::draw_command::{DrawCommand, RenderState};

/// Computes the draw commands for one paint pass of a cropped video.
///
/// Output order: border fills (left, right, top, bottom), then the main
/// frame, then visible overlays in the order given. Degenerate geometry
/// (empty allocation, zero-extent crop, overlays outside the crop) produces
/// fewer commands, never an error.
pub fn compute_draw_commands<H>(
    allocation: PixelBox,
    frame: Option<&Frame<'_, H>>,
    config: &CropConfig,
    overlays: &[Overlay<'_, H>],
    appearance: &ActorAppearance,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    if allocation.is_empty() {
        return commands;
    }

    let flags = config.flags();

    let Some(frame) = frame else {
        if flags.borders {
            commands.push(DrawCommand::BorderFill {
                dest: allocation,
                color: appearance.border_color(),
                idle: true,
            });
        }
        return commands;
    };

    let output_region = config.output_region();
    let input_region = config.input_region();
    let frame_box = output_region.to_pixels(&allocation);

    if flags.borders {
        push_borders(&mut commands, &allocation, &frame_box, &output_region, appearance);
    }

    if flags.frame {
        commands.push(DrawCommand::MainFrame {
            dest: frame_box,
            tex_coords: input_region,
            state: RenderState {
                opacity: appearance.paint_opacity,
                cull_backface: flags.cull_backface,
            },
        });
    }

    if flags.overlays && !overlays.is_empty() {
        let (width, height) = frame.resolution().as_f32();
        let frame_input_box = input_region.scale(width, height);

        for (index, overlay) in overlays.iter().enumerate() {
            let Some((dest, tex_coords)) =
                project_overlay(&overlay.position(), &frame_input_box, &frame_box)
            else {
                log::trace!("Overlay {index} lies outside the cropped region, skipping");
                continue;
            };
            commands.push(DrawCommand::Overlay {
                index,
                dest,
                tex_coords,
                state: RenderState {
                    opacity: appearance.paint_opacity,
                    cull_backface: false,
                },
            });
        }
    }

    commands
}

/// Emits one fill per short edge of the output region.
///
/// Left and right fills span the full allocation height; top and bottom
/// fills span only between them, so corners are covered exactly once.
fn push_borders(
    commands: &mut Vec<DrawCommand>,
    allocation: &PixelBox,
    frame_box: &PixelBox,
    output_region: &NormalizedBox,
    appearance: &ActorAppearance,
) {
    let color = appearance.border_color();
    let mut fill = |dest: PixelBox| {
        commands.push(DrawCommand::BorderFill {
            dest,
            color,
            idle: false,
        })
    };

    if !output_region.covers_left() {
        fill(PixelBox::new(
            allocation.x1,
            allocation.y1,
            frame_box.x1,
            allocation.y2,
        ));
    }
    if !output_region.covers_right() {
        fill(PixelBox::new(
            frame_box.x2,
            allocation.y1,
            allocation.x2,
            allocation.y2,
        ));
    }
    if !output_region.covers_top() {
        fill(PixelBox::new(
            frame_box.x1,
            allocation.y1,
            frame_box.x2,
            frame_box.y1,
        ));
    }
    if !output_region.covers_bottom() {
        fill(PixelBox::new(
            frame_box.x1,
            frame_box.y2,
            frame_box.x2,
            allocation.y2,
        ));
    }
}

/// Clips an overlay to the cropped part of the frame and re-projects it.
///
/// Returns `(paint_box, input_box)`: where to draw in actor space, and which
/// part of the overlay texture to sample in its own [0, 1] space. `None`
/// when nothing of the overlay is visible.
fn project_overlay(
    position: &PixelBox,
    frame_input_box: &PixelBox,
    frame_box: &PixelBox,
) -> Option<(PixelBox, PixelBox)> {
    if frame_input_box.is_empty() || position.is_empty() {
        return None;
    }

    let overlay_input_box = position.intersect(frame_input_box);

    let input_box = PixelBox {
        x1: (overlay_input_box.x1 - position.x1) / position.width(),
        y1: (overlay_input_box.y1 - position.y1) / position.height(),
        x2: (overlay_input_box.x2 - position.x1) / position.width(),
        y2: (overlay_input_box.y2 - position.y1) / position.height(),
    };
    if input_box.x1 >= input_box.x2 || input_box.y1 >= input_box.y2 {
        return None;
    }

    let remap_x = |x: f32| {
        frame_box.x1 + frame_box.width() * ((x - frame_input_box.x1) / frame_input_box.width())
    };
    let remap_y = |y: f32| {
        frame_box.y1 + frame_box.height() * ((y - frame_input_box.y1) / frame_input_box.height())
    };
    let paint_box = PixelBox {
        x1: remap_x(overlay_input_box.x1),
        y1: remap_y(overlay_input_box.y1),
        x2: remap_x(overlay_input_box.x2),
        y2: remap_y(overlay_input_box.y2),
    };

    Some((paint_box, input_box))
}
