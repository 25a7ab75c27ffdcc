#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod color;

use color::cell_color_rgba;
use life_grid::{LifeConfig, Loc, MIN_TICK_INTERVAL, Session, SimulationState};
use log::{error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const BACKGROUND_COLOR: Color = Color::BLACK;
const TITLE: &str = "Game of Life";

#[derive(Error, Debug)]
pub enum AnimateError {
    #[error("Event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] OsError),
    #[error("Pixels failed: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("Surface resize failed: {0}")]
    Texture(#[from] pixels::TextureError),
}

/// Opens a window showing `session` and runs it until the window closes.
///
/// Left click toggles a cell, Space starts and stops the simulation, R resets
/// the board, and Escape or Q quits. The loop only schedules a wake-up while
/// the session is running.
pub fn animate(config: LifeConfig, session: Session) -> Result<(), AnimateError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(config, session);
    event_loop.run_app(&mut handler)?;
    match handler.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    config: LifeConfig,
    session: Session,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    cursor: Option<PhysicalPosition<f64>>,
    next_update: Option<Instant>,
}

impl App {
    fn new(
        event_loop: &ActiveEventLoop,
        config: LifeConfig,
        session: Session,
    ) -> Result<Self, AnimateError> {
        let window = Arc::new(Self::build_window(event_loop, &config)?);
        let pixels = Self::build_pixels(&window, &config)?;
        Ok(Self {
            config,
            session,
            window,
            pixels,
            cursor: None,
            next_update: None,
        })
    }

    fn build_window(event_loop: &ActiveEventLoop, config: &LifeConfig) -> Result<Window, OsError> {
        let window_size = PhysicalSize::new(
            config.cols * config.cell_pixel_width,
            config.rows * config.cell_pixel_width,
        );
        let window_attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_inner_size(window_size)
            .with_min_inner_size(PhysicalSize::new(config.cols, config.rows))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        config: &LifeConfig,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(config.cols, config.rows, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    fn on_create(&mut self) {
        self.update_title();
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        let Some(previous) = self.next_update else {
            return;
        };
        if self.session.tick() {
            self.update_title();
            self.window.request_redraw();
        }
        self.next_update = Some(next_deadline(
            previous,
            Instant::now(),
            self.config.tick_interval,
        ));
    }

    fn on_click(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };
        let Ok((col, row)) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        else {
            return;
        };
        if self.session.click(Loc::new(row as i32, col as i32)).is_ok() {
            self.window.request_redraw();
        }
    }

    fn on_toggle_start(&mut self) {
        let state = self.session.toggle_start();
        self.sync_timer(state);
        self.window.request_redraw();
    }

    fn on_reset(&mut self) {
        self.session.reset();
        let state = self.session.state();
        self.sync_timer(state);
        self.window.request_redraw();
    }

    /// Arms the tick timer when running and drops it when stopped, so a
    /// stopped session never sees another tick.
    fn sync_timer(&mut self, state: SimulationState) {
        self.next_update = first_deadline(state, Instant::now(), self.config.tick_interval);
        self.update_title();
    }

    fn update_title(&self) {
        self.window
            .set_title(&window_title(self.session.state(), self.session.generation()));
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) -> Result<(), AnimateError> {
        if size.width > 0 && size.height > 0 {
            self.pixels.resize_surface(size.width, size.height)?;
            self.window.request_redraw();
        }
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<(), AnimateError> {
        let grid = self.session.grid();
        let screen = self.pixels.frame_mut();
        debug_assert_eq!(screen.len(), 4 * grid.num_cells());

        let cols = grid.cols() as usize;
        for (index, (alive, pixel)) in grid
            .cells_iter()
            .zip(screen.chunks_exact_mut(4))
            .enumerate()
        {
            let loc = Loc::new((index / cols) as i32, (index % cols) as i32);
            let selected = self.session.is_selected(loc);
            pixel.copy_from_slice(&cell_color_rgba(*alive, selected));
        }
        self.pixels.render()?;
        Ok(())
    }
}

/// When the first tick after a start is due; stopped sessions get none.
fn first_deadline(state: SimulationState, now: Instant, interval: Duration) -> Option<Instant> {
    match state {
        SimulationState::Running => Some(now + interval.max(MIN_TICK_INTERVAL)),
        SimulationState::Stopped => None,
    }
}

/// Keeps ticks on the `previous + interval` cadence, skipping ticks that were
/// missed instead of replaying them. Always strictly after `previous`.
fn next_deadline(previous: Instant, now: Instant, interval: Duration) -> Instant {
    let interval = interval.max(MIN_TICK_INTERVAL);
    let on_cadence = previous + interval;
    if on_cadence > now {
        on_cadence
    } else {
        now + interval
    }
}

fn window_title(state: SimulationState, generation: u64) -> String {
    let label = match state {
        SimulationState::Running => "running",
        SimulationState::Stopped => "stopped, Space to start",
    };
    format!("{} - generation {} ({})", TITLE, generation, label)
}

struct AppEventHandler {
    pending: Option<(LifeConfig, Session)>,
    app: Option<App>,
    error: Option<AnimateError>,
}

impl AppEventHandler {
    fn new(config: LifeConfig, session: Session) -> Self {
        Self {
            pending: Some((config, session)),
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AnimateError) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppEventHandler {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && let Some(app) = self.app.as_mut()
        {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some((config, session)) = self.pending.take() else {
            return;
        };
        match App::new(event_loop, config, session) {
            Ok(mut app) => {
                info!(
                    "Opened {}x{} board, tick every {:?}",
                    config.rows, config.cols, config.tick_interval
                );
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        let result = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                match code {
                    KeyCode::Escape | KeyCode::KeyQ => event_loop.exit(),
                    KeyCode::Space => app.on_toggle_start(),
                    KeyCode::KeyR => app.on_reset(),
                    _ => (),
                }
                Ok(())
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Some(position);
                Ok(())
            }
            WindowEvent::CursorLeft { .. } => {
                app.cursor = None;
                Ok(())
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                app.on_click();
                Ok(())
            }
            WindowEvent::Resized(size) => app.on_resize(size),
            WindowEvent::RedrawRequested => app.on_redraw(),
            _ => Ok(()),
        };
        if let Err(err) = result {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let control_flow = match self.app.as_ref().and_then(|app| app.next_update) {
            Some(wakeup_time) => ControlFlow::WaitUntil(wakeup_time),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = self.app.as_mut() {
            app.next_update = None;
            info!("Exiting at generation {}", app.session.generation());
        }
    }
}
