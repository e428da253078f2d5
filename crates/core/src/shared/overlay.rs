use std::fmt;

use super::pixel_box::PixelBox;

/// An auxiliary image (subtitle, logo, graphic) laid onto a video frame.
///
/// `position` is expressed in the frame's native pixel space, not in the
/// actor's, so the crop mapper has to re-project it alongside the frame.
pub struct Overlay<'a, H> {
    texture: &'a H,
    position: PixelBox,
}

impl<'a, H> Overlay<'a, H> {
    pub fn new(texture: &'a H, position: PixelBox) -> Self {
        Self { texture, position }
    }

    pub fn texture(&self) -> &'a H {
        self.texture
    }

    pub fn position(&self) -> PixelBox {
        self.position
    }
}

impl<H> Clone for Overlay<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Overlay<'_, H> {}

impl<H> fmt::Debug for Overlay<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
