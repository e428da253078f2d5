use thiserror::Error;

use super::pixel_box::PixelBox;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RegionError {
    #[error("{component} = {value} is outside [0, 1]")]
    OutOfRange { component: &'static str, value: f32 },
    #[error("{axis} edges are inverted ({start} > {end})")]
    Inverted {
        axis: &'static str,
        start: f32,
        end: f32,
    },
}

/// A rectangle in [0, 1] fractional coordinates relative to some parent
/// extent (a video frame or an actor allocation).
///
/// Only constructible through [`NormalizedBox::new`], so every value that
/// reaches the region mapper already satisfies `0 <= x1 <= x2 <= 1` and
/// `0 <= y1 <= y2 <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedBox {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl NormalizedBox {
    pub const UNIT: NormalizedBox = NormalizedBox {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, RegionError> {
        for (component, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
            // NaN fails the range check as well.
            if !(0.0..=1.0).contains(&value) {
                return Err(RegionError::OutOfRange { component, value });
            }
        }
        if x1 > x2 {
            return Err(RegionError::Inverted {
                axis: "horizontal",
                start: x1,
                end: x2,
            });
        }
        if y1 > y2 {
            return Err(RegionError::Inverted {
                axis: "vertical",
                start: y1,
                end: y2,
            });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    pub fn x1(&self) -> f32 {
        self.x1
    }

    pub fn y1(&self) -> f32 {
        self.y1
    }

    pub fn x2(&self) -> f32 {
        self.x2
    }

    pub fn y2(&self) -> f32 {
        self.y2
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// True when the box spans the full parent on every edge.
    pub fn is_unit(&self) -> bool {
        *self == Self::UNIT
    }

    pub fn covers_left(&self) -> bool {
        self.x1 <= 0.0
    }

    pub fn covers_right(&self) -> bool {
        self.x2 >= 1.0
    }

    pub fn covers_top(&self) -> bool {
        self.y1 <= 0.0
    }

    pub fn covers_bottom(&self) -> bool {
        self.y2 >= 1.0
    }

    /// Maps the box linearly onto `parent`: each edge is
    /// `parent.origin + parent.size * fraction`.
    pub fn to_pixels(&self, parent: &PixelBox) -> PixelBox {
        let width = parent.width();
        let height = parent.height();
        PixelBox {
            x1: parent.x1 + width * self.x1,
            y1: parent.y1 + height * self.y1,
            x2: parent.x1 + width * self.x2,
            y2: parent.y1 + height * self.y2,
        }
    }

    /// Scales the box onto a resolution anchored at the origin.
    pub fn scale(&self, width: f32, height: f32) -> PixelBox {
        PixelBox {
            x1: self.x1 * width,
            y1: self.y1 * height,
            x2: self.x2 * width,
            y2: self.y2 * height,
        }
    }
}

impl Default for NormalizedBox {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<[f32; 4]> for NormalizedBox {
    type Error = RegionError;

    fn try_from(coords: [f32; 4]) -> Result<Self, Self::Error> {
        let [x1, y1, x2, y2] = coords;
        Self::new(x1, y1, x2, y2)
    }
}
