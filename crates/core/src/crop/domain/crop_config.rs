use crate::shared::normalized_box::{NormalizedBox, RegionError};

/// Independent paint toggles plus the back-face culling render flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintFlags {
    pub borders: bool,
    pub frame: bool,
    pub overlays: bool,
    pub cull_backface: bool,
}

impl Default for PaintFlags {
    fn default() -> Self {
        Self {
            borders: false,
            frame: true,
            overlays: true,
            cull_backface: false,
        }
    }
}

/// Crop configuration: which part of the frame to sample and where to place
/// it inside the actor's allocation.
///
/// Every mutation that changes what would be painted marks the config dirty.
/// The owner checks [`CropConfig::take_dirty`] before the next paint pass.
/// Invalid regions are rejected with a warning and the previous value is
/// retained.
#[derive(Clone, Debug, PartialEq)]
pub struct CropConfig {
    input_region: NormalizedBox,
    output_region: NormalizedBox,
    flags: PaintFlags,
    dirty: bool,
}

impl CropConfig {
    pub fn new() -> Self {
        Self {
            input_region: NormalizedBox::UNIT,
            output_region: NormalizedBox::UNIT,
            flags: PaintFlags::default(),
            dirty: false,
        }
    }

    pub fn input_region(&self) -> NormalizedBox {
        self.input_region
    }

    pub fn output_region(&self) -> NormalizedBox {
        self.output_region
    }

    pub fn flags(&self) -> PaintFlags {
        self.flags
    }

    /// Sets the sampled part of the frame, `[x1, y1, x2, y2]` in [0, 1].
    pub fn set_input_region(&mut self, coords: [f32; 4]) -> Result<(), RegionError> {
        match NormalizedBox::try_from(coords) {
            Ok(region) => {
                self.input_region = region;
                self.dirty = true;
                Ok(())
            }
            Err(e) => {
                log::warn!("Input region must be given in [0, 1] values: {e}");
                Err(e)
            }
        }
    }

    /// Sets the placement inside the allocation, `[x1, y1, x2, y2]` in [0, 1].
    pub fn set_output_region(&mut self, coords: [f32; 4]) -> Result<(), RegionError> {
        match NormalizedBox::try_from(coords) {
            Ok(region) => {
                self.output_region = region;
                self.dirty = true;
                Ok(())
            }
            Err(e) => {
                log::warn!("Output region must be given in [0, 1] values: {e}");
                Err(e)
            }
        }
    }

    pub fn set_paint_borders(&mut self, enabled: bool) {
        if self.flags.borders != enabled {
            self.flags.borders = enabled;
            self.dirty = true;
        }
    }

    pub fn set_paint_frame(&mut self, enabled: bool) {
        if self.flags.frame != enabled {
            self.flags.frame = enabled;
            self.dirty = true;
        }
    }

    pub fn set_paint_overlays(&mut self, enabled: bool) {
        if self.flags.overlays != enabled {
            self.flags.overlays = enabled;
            self.dirty = true;
        }
    }

    /// Culling is render state picked up by the next paint; it does not
    /// invalidate on its own.
    pub fn set_cull_backface(&mut self, enabled: bool) {
        self.flags.cull_backface = enabled;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether a repaint was requested since the last call, and
    /// clears the request.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self::new()
    }
}
