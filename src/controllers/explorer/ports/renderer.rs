use std::error::Error;
use std::time::Duration;

use crate::core::data::classified_point_set::ClassifiedPointSet;
use crate::core::data::display_hint::DisplayHint;
use crate::core::data::viewport::Viewport;

pub type RenderError = Box<dyn Error + Send + Sync>;

/// One classified pass, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFrame {
    pub index: u64,
    pub points: ClassifiedPointSet,
    pub viewport: Viewport,
    pub hint: DisplayHint,
    pub lattice_rows: usize,
    pub lattice_columns: usize,
    pub compute_duration: Duration,
}

pub trait ScatterRendererPort {
    fn render(&mut self, frame: &ScatterFrame) -> Result<(), RenderError>;
}
