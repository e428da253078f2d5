/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }
}

/// Read-only snapshot of the hosting actor's paint state for one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorAppearance {
    pub background: Color,
    /// Effective opacity after inheriting from parents (0 = invisible).
    pub paint_opacity: u8,
}

impl ActorAppearance {
    /// Background colour as it should be painted into border fills: the
    /// colour's own alpha is replaced by the paint opacity.
    pub fn border_color(&self) -> Color {
        self.background.with_alpha(self.paint_opacity)
    }
}

impl Default for ActorAppearance {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            paint_opacity: 255,
        }
    }
}
