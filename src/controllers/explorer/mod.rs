//! Interactive zoom loop around the Mandelbrot sampler.
//!
//! The controller owns the session state and talks to the outside world only
//! through two ports: a [`ScatterRendererPort`] that draws each frame and an
//! [`ExplorerEventSourcePort`] it blocks on for the next selection or quit.

pub mod controller;
pub mod errors;
pub mod events;
pub mod ports;
pub mod session;

pub use controller::{ExplorerController, ExplorerSummary};
pub use errors::ExplorerError;
pub use events::ExplorerEvent;
pub use ports::{ExplorerEventSourcePort, RenderError, ScatterFrame, ScatterRendererPort};
pub use session::{ExplorerSession, SelectionBuffer, SessionUpdate};
