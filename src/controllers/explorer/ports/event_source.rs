use crate::controllers::explorer::events::ExplorerEvent;

/// Blocking source of explorer events.
pub trait ExplorerEventSourcePort {
    /// Waits for the next event; `None` once the source is exhausted.
    fn next_event(&mut self) -> Option<ExplorerEvent>;
}

impl<I> ExplorerEventSourcePort for I
where
    I: Iterator<Item = ExplorerEvent>,
{
    fn next_event(&mut self) -> Option<ExplorerEvent> {
        self.next()
    }
}
