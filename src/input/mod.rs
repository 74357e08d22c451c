//! Input adapters for the explorer.
//!
//! Each adapter turns some outside source of picks and key presses into a
//! stream of [`ExplorerEvent`](crate::ExplorerEvent)s.

#[cfg(feature = "gui")]
pub mod gui;
pub mod stdin;
