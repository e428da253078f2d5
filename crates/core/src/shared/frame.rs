use std::fmt;

/// Native pixel dimensions of a decoded video frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoResolution {
    pub width: u32,
    pub height: u32,
}

impl VideoResolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

/// A borrowed view of one decoded video frame.
///
/// The texture handle `H` is whatever the rendering backend uses to draw
/// the frame (a GPU texture, a pipeline id, a CPU image). The view is only
/// valid for a single paint pass; the decoder owns the underlying data.
pub struct Frame<'a, H> {
    resolution: VideoResolution,
    texture: &'a H,
}

impl<'a, H> Frame<'a, H> {
    pub fn new(resolution: VideoResolution, texture: &'a H) -> Self {
        Self {
            resolution,
            texture,
        }
    }

    pub fn resolution(&self) -> VideoResolution {
        self.resolution
    }

    pub fn texture(&self) -> &'a H {
        self.texture
    }
}

impl<H> Clone for Frame<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Frame<'_, H> {}

impl<H> fmt::Debug for Frame<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("resolution", &self.resolution)
            .finish_non_exhaustive()
    }
}
