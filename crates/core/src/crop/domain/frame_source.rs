use crate::shared::frame::Frame;
use crate::shared::overlay::Overlay;

/// Provides the latest decoded frame and its overlays for a paint pass.
///
/// Implemented by whatever owns the decoding pipeline. Returned views borrow
/// from the source and must not outlive the paint pass that requested them.
pub trait FrameSource<H> {
    /// The current frame, or `None` until the first one has been decoded.
    fn frame(&self) -> Option<Frame<'_, H>>;

    /// Overlays attached to the current frame, in paint order.
    fn overlays(&self) -> Vec<Overlay<'_, H>>;

    fn has_frame(&self) -> bool {
        self.frame().is_some()
    }
}
