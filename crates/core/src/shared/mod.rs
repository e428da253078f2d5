pub mod color;
pub mod frame;
pub mod normalized_box;
pub mod overlay;
pub mod pixel_box;
