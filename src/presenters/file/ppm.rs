use std::path::PathBuf;

use log::info;

use crate::controllers::explorer::ports::{RenderError, ScatterFrame, ScatterRendererPort};
use crate::core::actions::rasterize_points::rasterize_points::rasterize_points;
use crate::core::data::pixel_rect::PixelRect;
use crate::storage::write_ppm::write_ppm;

/// Renders each frame as a scatter plot into a PPM file.
///
/// With `numbered` set every frame gets its own file (`name_0000.ppm`,
/// `name_0001.ppm`, ...); otherwise each frame overwrites the previous one.
pub struct PpmFilePresenter {
    filepath: PathBuf,
    pixel_rect: PixelRect,
    numbered: bool,
    written: Vec<PathBuf>,
}

impl PpmFilePresenter {
    pub fn new(filepath: impl Into<PathBuf>, pixel_rect: PixelRect) -> Self {
        Self {
            filepath: filepath.into(),
            pixel_rect,
            numbered: false,
            written: Vec::new(),
        }
    }

    #[must_use]
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Distinct files written so far, in order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, index: u64) -> PathBuf {
        if !self.numbered {
            return self.filepath.clone();
        }

        let stem = self
            .filepath
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frame".to_string());
        let extension = self
            .filepath
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ppm".to_string());

        self.filepath
            .with_file_name(format!("{}_{:04}.{}", stem, index, extension))
    }
}

impl ScatterRendererPort for PpmFilePresenter {
    fn render(&mut self, frame: &ScatterFrame) -> Result<(), RenderError> {
        let buffer = rasterize_points(&frame.points, frame.viewport, self.pixel_rect, &frame.hint);
        let path = self.frame_path(frame.index);

        write_ppm(&buffer, &path)?;
        info!("{}: saved frame {} to {}", frame.hint.title, frame.index, path.display());

        if self.written.last() != Some(&path) {
            self.written.push(path);
        }
        Ok(())
    }
}
