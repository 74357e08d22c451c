use std::sync::mpsc::Receiver;

use crate::controllers::explorer::events::ExplorerEvent;

/// Blocking event stream fed by the window thread.
///
/// Ends once every sender has been dropped.
pub struct ChannelEventSource {
    receiver: Receiver<ExplorerEvent>,
}

impl ChannelEventSource {
    pub fn new(receiver: Receiver<ExplorerEvent>) -> Self {
        Self { receiver }
    }
}

impl Iterator for ChannelEventSource {
    type Item = ExplorerEvent;

    fn next(&mut self) -> Option<ExplorerEvent> {
        self.receiver.recv().ok()
    }
}
