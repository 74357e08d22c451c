pub mod event_source;
pub mod renderer;

pub use event_source::ExplorerEventSourcePort;
pub use renderer::{RenderError, ScatterFrame, ScatterRendererPort};
