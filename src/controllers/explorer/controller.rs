use std::time::Instant;

use log::{debug, info};

use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::{
    ExplorerEventSourcePort, ScatterFrame, ScatterRendererPort,
};
use crate::controllers::explorer::session::{ExplorerSession, SessionUpdate};
use crate::core::actions::classify::classify::classify;
use crate::core::actions::classify::classify_parallel_rayon::classify_parallel_rayon;
use crate::core::actions::generate_grid::generate_grid::generate_grid;
use crate::core::data::display_hint::DisplayHint;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Outcome of a finished explorer run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExplorerSummary {
    pub frames_rendered: u64,
    pub final_viewport: Viewport,
}

/// Drives the sample, classify, render, wait cycle until the user quits.
pub struct ExplorerController {
    params: MandelbrotParams,
    parallel: bool,
    hint: DisplayHint,
    session: ExplorerSession,
    frames_rendered: u64,
}

impl ExplorerController {
    pub fn new(config: MandelbrotConfig) -> Result<Self, MandelbrotError> {
        let params = config.params()?;

        Ok(Self {
            params,
            parallel: config.parallel,
            hint: DisplayHint::default(),
            session: ExplorerSession::new(params.viewport(), config.min_extent),
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn with_display_hint(mut self, hint: DisplayHint) -> Self {
        self.hint = hint;
        self
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        &self.session
    }

    /// Samples and classifies the current viewport.
    #[must_use]
    pub fn compute_frame(&self) -> ScatterFrame {
        let params = self.params.with_viewport(self.session.viewport());
        let test = params.stability_test();
        let start = Instant::now();

        let lattice = generate_grid(params.viewport(), params.density());
        let points = if self.parallel {
            classify_parallel_rayon(&lattice, &test)
        } else {
            classify(&lattice, &test)
        };

        let compute_duration = start.elapsed();

        info!(
            "frame {}: {} of {} points stable in {:?}",
            self.frames_rendered,
            points.len(),
            lattice.len(),
            compute_duration
        );

        ScatterFrame {
            index: self.frames_rendered,
            points,
            viewport: params.viewport(),
            hint: self.hint.clone(),
            lattice_rows: lattice.rows(),
            lattice_columns: lattice.columns(),
            compute_duration,
        }
    }

    pub fn run<R, E>(
        &mut self,
        renderer: &mut R,
        events: &mut E,
    ) -> Result<ExplorerSummary, ExplorerError>
    where
        R: ScatterRendererPort + ?Sized,
        E: ExplorerEventSourcePort + ?Sized,
    {
        info!(
            "exploring {:?} at density {} with {} iterations",
            self.session.viewport(),
            self.params.density(),
            self.params.max_iterations()
        );

        while !self.session.is_quit() {
            let frame = self.compute_frame();

            renderer.render(&frame).map_err(ExplorerError::Render)?;
            self.frames_rendered += 1;

            self.wait_for_next_viewport(events);
        }

        info!("quit after {} frames", self.frames_rendered);

        Ok(ExplorerSummary {
            frames_rendered: self.frames_rendered,
            final_viewport: self.session.viewport(),
        })
    }

    fn wait_for_next_viewport<E>(&mut self, events: &mut E)
    where
        E: ExplorerEventSourcePort + ?Sized,
    {
        loop {
            let Some(event) = events.next_event() else {
                debug!("event source exhausted");
                self.session.request_quit();
                return;
            };

            match self.session.handle_event(event) {
                SessionUpdate::Pending => continue,
                SessionUpdate::Zoomed(viewport) => {
                    info!("zooming to {:?}", viewport);
                    return;
                }
                SessionUpdate::Quit => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::explorer::events::ExplorerEvent;
    use crate::controllers::explorer::ports::RenderError;
    use crate::core::data::complex::Complex;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<ScatterFrame>,
    }

    impl ScatterRendererPort for RecordingRenderer {
        fn render(&mut self, frame: &ScatterFrame) -> Result<(), RenderError> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    struct FailingRenderer;

    impl ScatterRendererPort for FailingRenderer {
        fn render(&mut self, _: &ScatterFrame) -> Result<(), RenderError> {
            Err("display went away".into())
        }
    }

    fn small_config() -> MandelbrotConfig {
        MandelbrotConfig {
            density: 40,
            ..MandelbrotConfig::default()
        }
    }

    #[test]
    fn test_quit_after_first_frame() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut renderer = RecordingRenderer::default();
        let mut events = vec![ExplorerEvent::Quit].into_iter();

        let summary = controller.run(&mut renderer, &mut events).unwrap();

        assert_eq!(summary.frames_rendered, 1);
        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(renderer.frames[0].viewport, small_config().viewport);
    }

    #[test]
    fn test_exhausted_events_end_the_run() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut renderer = RecordingRenderer::default();
        let mut events = std::iter::empty::<ExplorerEvent>();

        let summary = controller.run(&mut renderer, &mut events).unwrap();

        assert_eq!(summary.frames_rendered, 1);
        assert!(controller.session().is_quit());
    }

    #[test]
    fn test_selection_pair_triggers_new_frame() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut renderer = RecordingRenderer::default();
        let mut events = vec![
            ExplorerEvent::selection(0.3, 1.0),
            ExplorerEvent::Selection { x: None, y: Some(0.0) },
            ExplorerEvent::selection(-1.0, -0.2),
            ExplorerEvent::Quit,
        ]
        .into_iter();

        let summary = controller.run(&mut renderer, &mut events).unwrap();
        let zoomed = Viewport::new(-1.0, -0.2, 0.3, 1.0).unwrap();

        assert_eq!(summary.frames_rendered, 2);
        assert_eq!(summary.final_viewport, zoomed);
        assert_eq!(renderer.frames[1].viewport, zoomed);
        assert_eq!(renderer.frames[1].index, 1);
    }

    #[test]
    fn test_frame_points_stay_inside_viewport() {
        let controller = ExplorerController::new(small_config()).unwrap();

        let frame = controller.compute_frame();

        assert!(!frame.points.is_empty());
        assert!(frame.points.len() < frame.lattice_rows * frame.lattice_columns);
        assert!(frame.points.iter().all(|&p| frame.viewport.contains(p)));
        assert_eq!(frame.hint, DisplayHint::default());
    }

    #[test]
    fn test_serial_and_parallel_frames_agree() {
        let parallel = ExplorerController::new(small_config()).unwrap();
        let serial = ExplorerController::new(MandelbrotConfig {
            parallel: false,
            ..small_config()
        })
        .unwrap();

        assert_eq!(parallel.compute_frame().points, serial.compute_frame().points);
    }

    #[test]
    fn test_origin_is_in_first_frame_when_sampled() {
        // density 5 over a square viewport puts the origin on the lattice
        let config = MandelbrotConfig {
            viewport: Viewport::new(-1.0, -1.0, 1.0, 1.0).unwrap(),
            density: 5,
            ..MandelbrotConfig::default()
        };
        let controller = ExplorerController::new(config).unwrap();

        let frame = controller.compute_frame();

        assert!(frame.points.iter().any(|&p| p == Complex::ZERO));
    }

    #[test]
    fn test_render_failure_is_reported() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut events = std::iter::empty::<ExplorerEvent>();

        let result = controller.run(&mut FailingRenderer, &mut events);

        assert!(matches!(result, Err(ExplorerError::Render(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert!(matches!(
            ExplorerController::new(config),
            Err(MandelbrotError::ZeroMaxIterationsError)
        ));
    }
}
