use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Deserialize;
use thiserror::Error;

use videocrop_core::crop::domain::crop_config::CropConfig;
use videocrop_core::crop::domain::frame_source::FrameSource;
use videocrop_core::shared::color::{ActorAppearance, Color};
use videocrop_core::shared::frame::{Frame, VideoResolution};
use videocrop_core::shared::overlay::Overlay;
use videocrop_core::shared::pixel_box::PixelBox;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("allocation components must be finite, got {0:?}")]
    InvalidAllocation([f32; 4]),
    #[error("frame resolution must be positive, got {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },
    #[error("failed to load frame image {path}: {source}")]
    FrameImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Scene description as stored on disk.
///
/// Everything but the allocation has a default, so a minimal scene is
/// `{"allocation": [0, 0, 320, 240]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    pub allocation: [f32; 4],
    #[serde(default)]
    pub frame: Option<FrameSpec>,
    #[serde(default = "unit_region")]
    pub input_region: [f32; 4],
    #[serde(default = "unit_region")]
    pub output_region: [f32; 4],
    #[serde(default)]
    pub paint_borders: bool,
    #[serde(default = "default_true")]
    pub paint_frame: bool,
    #[serde(default = "default_true")]
    pub paint_overlays: bool,
    #[serde(default)]
    pub cull_backface: bool,
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    #[serde(default = "default_opacity")]
    pub paint_opacity: u8,
    #[serde(default)]
    pub overlays: Vec<OverlaySpec>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FrameSpec {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverlaySpec {
    pub position: [f32; 4],
    #[serde(default = "default_overlay_color")]
    pub color: [u8; 4],
}

fn unit_region() -> [f32; 4] {
    [0.0, 0.0, 1.0, 1.0]
}

fn default_true() -> bool {
    true
}

fn default_background() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_opacity() -> u8 {
    255
}

fn default_overlay_color() -> [u8; 4] {
    [255, 255, 255, 160]
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = fs::read_to_string(path).map_err(|source| SceneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    pub fn parse(json: &str) -> Result<Self, SceneError> {
        let scene: SceneFile = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Rejects values the serde defaults cannot rule out.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.allocation.iter().all(|v| v.is_finite()) {
            return Err(SceneError::InvalidAllocation(self.allocation));
        }
        if let Some(frame) = self.frame {
            if frame.width == 0 || frame.height == 0 {
                return Err(SceneError::EmptyFrame {
                    width: frame.width,
                    height: frame.height,
                });
            }
        }
        Ok(())
    }

    pub fn allocation(&self) -> PixelBox {
        let [x1, y1, x2, y2] = self.allocation;
        PixelBox::new(x1, y1, x2, y2)
    }

    pub fn appearance(&self) -> ActorAppearance {
        let [r, g, b, a] = self.background;
        ActorAppearance {
            background: Color::rgba(r, g, b, a),
            paint_opacity: self.paint_opacity,
        }
    }

    /// Builds the crop configuration through its validated setters.
    ///
    /// Invalid regions leave the default full-frame region in place.
    pub fn crop_config(&self) -> CropConfig {
        let mut config = CropConfig::new();
        if let Err(e) = config.set_input_region(self.input_region) {
            log::warn!("Ignoring scene input_region ({e}), using the full frame");
        }
        if let Err(e) = config.set_output_region(self.output_region) {
            log::warn!("Ignoring scene output_region ({e}), using the full allocation");
        }
        config.set_paint_borders(self.paint_borders);
        config.set_paint_frame(self.paint_frame);
        config.set_paint_overlays(self.paint_overlays);
        config.set_cull_backface(self.cull_backface);
        config
    }
}

/// What a draw command samples from when rasterised.
#[derive(Debug, Clone)]
pub enum Texture {
    Image(RgbaImage),
    Checker,
    Solid(Color),
}

/// Static frame source backed by a scene file.
pub struct SceneSource {
    frame: Option<(VideoResolution, Texture)>,
    overlays: Vec<(PixelBox, Texture)>,
}

impl SceneSource {
    /// `frame_image`, when given, replaces the checker pattern used for the
    /// main frame. Its size does not need to match the scene resolution.
    pub fn from_scene(scene: &SceneFile, frame_image: Option<&Path>) -> Result<Self, SceneError> {
        let texture = match frame_image {
            Some(path) => {
                let img = image::open(path).map_err(|source| SceneError::FrameImage {
                    path: path.to_path_buf(),
                    source,
                })?;
                Texture::Image(img.to_rgba8())
            }
            None => Texture::Checker,
        };
        let frame = scene
            .frame
            .map(|spec| (VideoResolution::new(spec.width, spec.height), texture));

        let overlays = scene
            .overlays
            .iter()
            .map(|spec| {
                let [x1, y1, x2, y2] = spec.position;
                let [r, g, b, a] = spec.color;
                (
                    PixelBox::new(x1, y1, x2, y2),
                    Texture::Solid(Color::rgba(r, g, b, a)),
                )
            })
            .collect();

        Ok(Self { frame, overlays })
    }
}

impl FrameSource<Texture> for SceneSource {
    fn frame(&self) -> Option<Frame<'_, Texture>> {
        self.frame
            .as_ref()
            .map(|(resolution, texture)| Frame::new(*resolution, texture))
    }

    fn overlays(&self) -> Vec<Overlay<'_, Texture>> {
        self.overlays
            .iter()
            .map(|(position, texture)| Overlay::new(texture, *position))
            .collect()
    }
}
