use log::{debug, warn};

use crate::controllers::explorer::events::ExplorerEvent;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Raw coordinates collected towards the next pair of corner selections.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionBuffer {
    values: Vec<f64>,
}

impl SelectionBuffer {
    /// Records one selection and returns both corners once a pair is complete.
    ///
    /// Selections with a missing coordinate are dropped. A zero coordinate is
    /// a real coordinate.
    pub fn push(&mut self, x: Option<f64>, y: Option<f64>) -> Option<(Complex, Complex)> {
        // Leftover values from an interrupted pair.
        if self.values.len() >= 4 {
            self.values.clear();
        }

        let (Some(x), Some(y)) = (x, y) else {
            return None;
        };

        self.values.push(x);
        self.values.push(y);

        if let [x1, y1, x2, y2] = self.values[..] {
            self.values.clear();
            return Some((Complex::new(x1, y1), Complex::new(x2, y2)));
        }

        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// What a single event did to the session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionUpdate {
    Pending,
    Zoomed(Viewport),
    Quit,
}

/// Mutable state of an explorer run: the current viewport, the selection
/// buffer and the quit flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSession {
    viewport: Viewport,
    selections: SelectionBuffer,
    min_extent: f64,
    quit: bool,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(viewport: Viewport, min_extent: f64) -> Self {
        Self {
            viewport,
            selections: SelectionBuffer::default(),
            min_extent,
            quit: false,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn selections(&self) -> &SelectionBuffer {
        &self.selections
    }

    #[must_use]
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn handle_event(&mut self, event: ExplorerEvent) -> SessionUpdate {
        match event {
            ExplorerEvent::Quit => {
                self.request_quit();
                SessionUpdate::Quit
            }
            ExplorerEvent::Selection { x, y } => self.handle_selection(x, y),
        }
    }

    fn handle_selection(&mut self, x: Option<f64>, y: Option<f64>) -> SessionUpdate {
        // Anything off the current viewport counts as absent, NaN included.
        let viewport = self.viewport;
        let x = x.filter(|&x| x >= viewport.x_min() && x <= viewport.x_max());
        let y = y.filter(|&y| y >= viewport.y_min() && y <= viewport.y_max());

        if x.is_none() || y.is_none() {
            debug!("dropping selection outside the plot");
        }

        let Some((first, second)) = self.selections.push(x, y) else {
            return SessionUpdate::Pending;
        };

        let viewport = match Viewport::from_selections_clamped(first, second, self.min_extent) {
            Ok(viewport) => viewport,
            Err(err) => {
                warn!("ignoring selection pair {:?} / {:?}: {}", first, second, err);
                return SessionUpdate::Pending;
            }
        };

        if viewport.width() > (first.real - second.real).abs()
            || viewport.height() > (first.imag - second.imag).abs()
        {
            warn!(
                "selection narrower than {:e}, widened to {:?}",
                self.min_extent, viewport
            );
        }

        self.viewport = viewport;
        SessionUpdate::Zoomed(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_EXTENT: f64 = 1e-12;

    fn classic_session() -> ExplorerSession {
        ExplorerSession::new(Viewport::new(-2.0, -1.5, 0.5, 1.5).unwrap(), MIN_EXTENT)
    }

    #[test]
    fn test_buffer_completes_pair_and_empties() {
        let mut buffer = SelectionBuffer::default();

        assert_eq!(buffer.push(Some(0.3), Some(1.0)), None);
        assert_eq!(buffer.len(), 2);
        assert_eq!(
            buffer.push(Some(-1.0), Some(-0.2)),
            Some((Complex::new(0.3, 1.0), Complex::new(-1.0, -0.2)))
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_buffer_drops_selection_with_missing_coordinate() {
        let mut buffer = SelectionBuffer::default();

        assert_eq!(buffer.push(None, Some(1.0)), None);
        assert_eq!(buffer.push(Some(1.0), None), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_buffer_keeps_zero_coordinates() {
        let mut buffer = SelectionBuffer::default();

        buffer.push(Some(0.0), Some(0.0));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_buffer_resets_stale_values() {
        let mut buffer = SelectionBuffer {
            values: vec![1.0, 2.0, 3.0, 4.0],
        };

        assert_eq!(buffer.push(Some(0.5), Some(0.5)), None);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_selection_pair_normalizes_viewport() {
        let mut session = classic_session();

        assert_eq!(
            session.handle_event(ExplorerEvent::selection(0.3, 1.0)),
            SessionUpdate::Pending
        );

        let expected = Viewport::new(-1.0, -0.2, 0.3, 1.0).unwrap();
        assert_eq!(
            session.handle_event(ExplorerEvent::selection(-1.0, -0.2)),
            SessionUpdate::Zoomed(expected)
        );
        assert_eq!(session.viewport(), expected);
    }

    #[test]
    fn test_missing_coordinates_do_not_count_towards_pair() {
        let mut session = classic_session();

        session.handle_event(ExplorerEvent::selection(0.3, 1.0));
        let update = session.handle_event(ExplorerEvent::Selection { x: None, y: None });

        assert_eq!(update, SessionUpdate::Pending);
        assert_eq!(session.viewport(), Viewport::new(-2.0, -1.5, 0.5, 1.5).unwrap());
        assert_eq!(session.selections().len(), 2);
    }

    #[test]
    fn test_identical_selections_are_widened() {
        let mut session = classic_session();

        session.handle_event(ExplorerEvent::selection(-0.5, 0.25));
        let update = session.handle_event(ExplorerEvent::selection(-0.5, 0.25));

        let SessionUpdate::Zoomed(viewport) = update else {
            panic!("expected a zoom, got {:?}", update);
        };
        assert!(viewport.width() >= MIN_EXTENT * 0.999);
        assert!(viewport.contains(Complex::new(-0.5, 0.25)));
    }

    #[test]
    fn test_non_finite_selection_keeps_viewport() {
        let mut session = classic_session();

        session.handle_event(ExplorerEvent::selection(f64::NAN, 0.0));
        let update = session.handle_event(ExplorerEvent::selection(0.1, 0.2));

        assert_eq!(update, SessionUpdate::Pending);
        assert_eq!(session.viewport(), Viewport::new(-2.0, -1.5, 0.5, 1.5).unwrap());
    }

    #[test]
    fn test_selections_outside_viewport_are_dropped() {
        let mut session = classic_session();

        session.handle_event(ExplorerEvent::selection(50.0, 50.0));
        let update = session.handle_event(ExplorerEvent::selection(60.0, 70.0));

        assert_eq!(update, SessionUpdate::Pending);
        assert!(session.selections().is_empty());
        assert_eq!(session.viewport(), Viewport::new(-2.0, -1.5, 0.5, 1.5).unwrap());
    }

    #[test]
    fn test_selections_far_outside_viewport_cannot_overflow() {
        let mut session = classic_session();

        session.handle_event(ExplorerEvent::selection(-1e308, 0.0));
        let update = session.handle_event(ExplorerEvent::selection(1e308, 1.0));

        assert_eq!(update, SessionUpdate::Pending);
        assert_eq!(session.viewport(), Viewport::new(-2.0, -1.5, 0.5, 1.5).unwrap());
    }

    #[test]
    fn test_selection_on_viewport_edge_counts() {
        let mut session = classic_session();

        session.handle_event(ExplorerEvent::selection(-2.0, -1.5));
        let update = session.handle_event(ExplorerEvent::selection(0.0, 0.0));

        assert_eq!(
            update,
            SessionUpdate::Zoomed(Viewport::new(-2.0, -1.5, 0.0, 0.0).unwrap())
        );
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut session = classic_session();

        assert!(!session.is_quit());
        assert_eq!(session.handle_event(ExplorerEvent::Quit), SessionUpdate::Quit);
        assert!(session.is_quit());
    }
}
