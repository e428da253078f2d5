use crate::shared::color::Color;
use crate::shared::normalized_box::NormalizedBox;
use crate::shared::pixel_box::PixelBox;

/// Render state carried alongside textured draws; never affects geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderState {
    pub opacity: u8,
    pub cull_backface: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    BorderFill,
    MainFrame,
    Overlay,
}

/// One unit of mapper output, consumed by the rendering backend right away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Solid fill for allocation space the frame does not cover. `idle` is
    /// set when no frame has been decoded yet and the fill spans the whole
    /// allocation.
    BorderFill {
        dest: PixelBox,
        color: Color,
        idle: bool,
    },
    MainFrame {
        dest: PixelBox,
        tex_coords: NormalizedBox,
        state: RenderState,
    },
    /// `index` points into the overlay list handed to the mapper.
    /// `tex_coords` are in the overlay's own [0, 1] texture space.
    Overlay {
        index: usize,
        dest: PixelBox,
        tex_coords: PixelBox,
        state: RenderState,
    },
}

impl DrawCommand {
    pub fn kind(&self) -> DrawKind {
        match self {
            DrawCommand::BorderFill { .. } => DrawKind::BorderFill,
            DrawCommand::MainFrame { .. } => DrawKind::MainFrame,
            DrawCommand::Overlay { .. } => DrawKind::Overlay,
        }
    }

    pub fn dest(&self) -> PixelBox {
        match self {
            DrawCommand::BorderFill { dest, .. }
            | DrawCommand::MainFrame { dest, .. }
            | DrawCommand::Overlay { dest, .. } => *dest,
        }
    }

    /// Paint node name, for debugging output.
    pub fn label(&self) -> &'static str {
        match self {
            DrawCommand::BorderFill { idle: true, .. } => "CropIdleVideo",
            DrawCommand::BorderFill { idle: false, .. } => "CropVideoBorders",
            DrawCommand::MainFrame { .. } => "CropVideoFrame",
            DrawCommand::Overlay { .. } => "CropVideoOverlay",
        }
    }
}
