use crate::crop::domain::crop_config::CropConfig;
use crate::crop::domain::draw_command::{DrawCommand, DrawKind};
use crate::crop::domain::frame_source::FrameSource;
use crate::crop::domain::region_mapper::compute_draw_commands;
use crate::shared::color::ActorAppearance;
use crate::shared::pixel_box::PixelBox;

/// Paint pass: read config → pull frame and overlays → map → hand commands back.
///
/// Owns the crop configuration; the frame source is borrowed per call so a
/// decoder can keep delivering frames between passes.
#[derive(Clone, Debug, Default)]
pub struct CropContent {
    config: CropConfig,
}

impl CropContent {
    pub fn new(config: CropConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CropConfig {
        &mut self.config
    }

    /// True when the configuration changed since the last paint.
    pub fn needs_repaint(&self) -> bool {
        self.config.is_dirty()
    }

    /// Natural size of the content: the frame's native resolution.
    pub fn preferred_size<H>(&self, source: &impl FrameSource<H>) -> Option<(f32, f32)> {
        source.frame().map(|frame| frame.resolution().as_f32())
    }

    pub fn paint<H>(
        &mut self,
        source: &impl FrameSource<H>,
        allocation: PixelBox,
        appearance: &ActorAppearance,
    ) -> Vec<DrawCommand> {
        self.config.take_dirty();

        let frame = source.frame();
        let overlays = source.overlays();
        let commands = compute_draw_commands(
            allocation,
            frame.as_ref(),
            &self.config,
            overlays.as_slice(),
            appearance,
        );

        let count = |kind: DrawKind| commands.iter().filter(|c| c.kind() == kind).count();
        let drawn_overlays = count(DrawKind::Overlay);
        log::debug!(
            "Crop paint: {} border fills, {} frame, {}/{} overlays",
            count(DrawKind::BorderFill),
            count(DrawKind::MainFrame),
            drawn_overlays,
            overlays.len()
        );

        commands
    }
}
