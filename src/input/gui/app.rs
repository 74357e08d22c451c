//! Main GUI application loop.

use std::error::Error;
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info, warn};
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
    keyboard::Key,
    window::{Window, WindowBuilder},
};

use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::explorer::events::ExplorerEvent;
use crate::core::data::display_hint::DEFAULT_TITLE;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::channel_events::ChannelEventSource;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::frame_slot::FrameSlot;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Window-side state: the presenter, egui and the channel into the explorer.
struct App {
    presenter: PixelsPresenter,
    slot: Arc<FrameSlot>,
    events: Sender<ExplorerEvent>,
    cursor: Option<PhysicalPosition<f64>>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl App {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        slot: Arc<FrameSlot>,
        events: Sender<ExplorerEvent>,
    ) -> Result<Self, pixels::Error> {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            presenter: PixelsPresenter::new(window)?,
            slot,
            events,
            cursor: None,
            egui_ctx,
            egui_state,
        })
    }

    fn send(&self, event: ExplorerEvent) {
        // The explorer may already have finished; nothing left to tell it.
        if self.events.send(event).is_err() {
            debug!("explorer no longer listening, dropped {:?}", event);
        }
    }

    fn take_published_frame(&mut self) -> bool {
        match self.slot.take() {
            Some(frame) => {
                self.presenter.set_frame(frame);
                true
            }
            None => false,
        }
    }

    /// Turns a left click at the cursor into a selection event.
    fn select_at_cursor(&self) {
        let Some(area) = self.presenter.plot_area() else {
            return;
        };

        let picked = self
            .cursor
            .and_then(|position| area.to_complex(position.x, position.y));

        self.send(ExplorerEvent::Selection {
            x: picked.map(|c| c.real),
            y: picked.map(|c| c.imag),
        });
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let frame = self.presenter.frame();

        self.egui_ctx.run(raw_input, |ctx| {
            let title = frame.map_or(DEFAULT_TITLE, |f| f.hint.title.as_str());

            egui::Window::new(title)
                .anchor(egui::Align2::CENTER_TOP, [0.0, 8.0])
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| match frame {
                    Some(frame) => {
                        ui.label(format!(
                            "Real: [{:.6}, {:.6}]",
                            frame.viewport.x_min(),
                            frame.viewport.x_max()
                        ));
                        ui.label(format!(
                            "Imag: [{:.6}, {:.6}]",
                            frame.viewport.y_min(),
                            frame.viewport.y_max()
                        ));
                        ui.label(format!(
                            "{} of {} points in {} ms",
                            frame.points.len(),
                            frame.lattice_rows * frame.lattice_columns,
                            frame.compute_duration.as_millis()
                        ));
                    }
                    None => {
                        ui.label("Computing...");
                    }
                });
        })
    }
}

/// Runs the windowed explorer until the user quits or closes the window.
pub fn run_gui(config: MandelbrotConfig) -> Result<(), Box<dyn Error>> {
    let mut controller = ExplorerController::new(config)?;

    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(DEFAULT_TITLE)
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let slot = Arc::new(FrameSlot::new(proxy.clone()));
    let (sender, receiver) = mpsc::channel();
    let mut app = App::new(window, &event_loop, Arc::clone(&slot), sender)?;

    let worker = thread::spawn(move || {
        let mut renderer = slot;
        let mut events = ChannelEventSource::new(receiver);
        let result = controller.run(&mut renderer, &mut events);

        let _ = proxy.send_event(GuiEvent::ExplorerFinished);
        result
    });

    event_loop.run(move |event, elwt| match event {
        Event::UserEvent(GuiEvent::FrameReady) => {
            if app.take_published_frame() {
                window.request_redraw();
            }
        }
        Event::UserEvent(GuiEvent::ExplorerFinished) => elwt.exit(),
        Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
            let response = app.egui_state.on_window_event(window, event);

            match event {
                WindowEvent::CloseRequested => {
                    app.send(ExplorerEvent::Quit);
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    let mut egui_output = app.update_ui(window);
                    let platform_output = std::mem::take(&mut egui_output.platform_output);
                    app.egui_state.handle_platform_output(window, platform_output);

                    if let Err(err) = app.presenter.render(egui_output, &app.egui_ctx) {
                        error!("render error: {}", err);
                        app.send(ExplorerEvent::Quit);
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = app.presenter.resize(size.width, size.height) {
                        warn!("resize to {}x{} failed: {}", size.width, size.height, err);
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    app.cursor = Some(*position);
                }
                WindowEvent::CursorLeft { .. } => {
                    app.cursor = None;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } if !response.consumed => {
                    app.select_at_cursor();
                }
                WindowEvent::KeyboardInput { event, .. }
                    if event.state == ElementState::Pressed && !response.consumed =>
                {
                    if let Key::Character(text) = &event.logical_key {
                        if let Some(quit) = text.chars().next().and_then(ExplorerEvent::from_key) {
                            app.send(quit);
                        }
                    }
                }
                _ => {
                    if response.repaint {
                        window.request_redraw();
                    }
                }
            }
        }
        _ => {}
    })?;

    match worker.join() {
        Ok(Ok(summary)) => {
            info!(
                "explorer finished after {} frames at {:?}",
                summary.frames_rendered, summary.final_viewport
            );
            Ok(())
        }
        Ok(Err(err)) => Err(err.into()),
        Err(_) => Err("explorer thread panicked".into()),
    }
}
