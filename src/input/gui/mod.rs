//! Windowed front end for the explorer.
//!
//! winit owns the main thread and pixels draws the scatter plot, with egui
//! overlaying the title. The explorer loop itself runs on a worker thread and
//! blocks on a channel of [`ExplorerEvent`](crate::ExplorerEvent)s.

mod app;
mod channel_events;
mod events;
mod frame_slot;

pub use app::run_gui;
