use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use winit::event_loop::EventLoopProxy;

use crate::controllers::explorer::ports::{RenderError, ScatterFrame, ScatterRendererPort};
use crate::input::gui::events::GuiEvent;

/// Hand-off point for frames computed on the explorer thread.
///
/// Only the latest frame is kept; the window thread takes it on redraw.
pub struct FrameSlot {
    frame: Mutex<Option<ScatterFrame>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl FrameSlot {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            frame: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take(&self) -> Option<ScatterFrame> {
        self.frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn publish(&self, frame: ScatterFrame) {
        *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);

        if self.event_loop_proxy.send_event(GuiEvent::FrameReady).is_err() {
            debug!("window closed before the frame could be shown");
        }
    }
}

impl ScatterRendererPort for Arc<FrameSlot> {
    fn render(&mut self, frame: &ScatterFrame) -> Result<(), RenderError> {
        self.publish(frame.clone());
        Ok(())
    }
}
