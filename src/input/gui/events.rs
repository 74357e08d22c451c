/// Custom user events for the GUI event loop.
///
/// These let the explorer worker thread wake the window thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A new frame was published to the [`FrameSlot`](super::frame_slot::FrameSlot).
    FrameReady,
    /// The explorer loop returned; the window should close.
    ExplorerFinished,
}
