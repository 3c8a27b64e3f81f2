//! Windowed host for the input-mode overlay
//!
//! This module drives a stand-in render loop using winit for window management and
//! softbuffer for software rendering. Every frame the backdrop is drawn, the overlay is
//! layered on top, and the buffer is presented.
//!
//! Keys: `M` switches the input mode, `Tab` shows/hides the overlay, `Escape` quits.

use crate::frame::{self, FrameStats};
use crate::overlay::InputModeOverlay;
use crate::screen::Screen;
use inputmode_layout::specs::display;
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

/// Window width, one window pixel per screen pixel
const WINDOW_WIDTH: u32 = display::WIDTH;

/// Window height
const WINDOW_HEIGHT: u32 = display::HEIGHT;

/// Time between frames
const FRAME_PERIOD: Duration =
    Duration::from_nanos(1_000_000_000 / display::REFRESH_RATE_HZ as u64);

type WindowSurface = Surface<Rc<Window>, Rc<Window>>;

/// Overlay viewer application
pub struct OverlayDisplay {
    overlay: InputModeOverlay,
    show_overlay: bool,
    max_frames: Option<u64>,
    stats: FrameStats,

    // Display state
    window: Option<Rc<Window>>,
    surface: Option<WindowSurface>,
    next_frame: Instant,
}

impl OverlayDisplay {
    pub fn new(overlay: InputModeOverlay, show_overlay: bool, max_frames: Option<u64>) -> Self {
        Self {
            overlay,
            show_overlay,
            max_frames,
            stats: FrameStats::default(),
            window: None,
            surface: None,
            next_frame: Instant::now(),
        }
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    fn create_surface(
        event_loop: &ActiveEventLoop,
    ) -> Result<(Rc<Window>, WindowSurface), Box<dyn std::error::Error>> {
        let window = Rc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title("inputmode-osd")
                    .with_resizable(false)
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        WINDOW_WIDTH,
                        WINDOW_HEIGHT,
                    )),
            )?,
        );

        let context = Context::new(window.clone())?;
        let mut surface = Surface::new(&context, window.clone())?;
        let (Some(width), Some(height)) =
            (NonZeroU32::new(WINDOW_WIDTH), NonZeroU32::new(WINDOW_HEIGHT))
        else {
            return Err("window dimensions must be non-zero".into());
        };
        surface.resize(width, height)?;

        Ok((window, surface))
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.logical_key.as_ref() {
            Key::Named(NamedKey::Escape) => self.stop(event_loop),
            Key::Named(NamedKey::Tab) => {
                self.show_overlay = !self.show_overlay;
                info!("Overlay {}", if self.show_overlay { "shown" } else { "hidden" });
            }
            Key::Character(c) if c.eq_ignore_ascii_case("m") => {
                let mode = self.overlay.toggle_mode();
                info!("Input mode: {:?}", mode);
            }
            _ => {}
        }
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop) {
        if event_loop.exiting() {
            return;
        }
        info!("=== Viewer Stopped ===");
        info!(
            "Frames: {}, overlay blits: {}",
            self.stats.frames, self.stats.overlay_blits
        );
        self.overlay.release();
        event_loop.exit();
    }
}

impl ApplicationHandler for OverlayDisplay {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let (window, surface) = match Self::create_surface(event_loop) {
            Ok(created) => created,
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window.clone());
        self.surface = Some(surface);
        self.next_frame = Instant::now();

        // Kick off the first frame
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.stop(event_loop),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),
            WindowEvent::RedrawRequested => {
                if let Some(surface) = self.surface.as_mut()
                    && let Err(e) =
                        Self::render(surface, &self.overlay, self.show_overlay, &mut self.stats)
                {
                    error!("Failed to render frame: {}", e);
                    event_loop.exit();
                    return;
                }
                if self.max_frames.is_some_and(|max| self.stats.frames >= max) {
                    info!("=== Frame Limit Reached ===");
                    self.stop(event_loop);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
            self.next_frame += FRAME_PERIOD;
            // Don't try to catch up after a stall
            if self.next_frame < now {
                self.next_frame = now + FRAME_PERIOD;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

impl OverlayDisplay {
    fn render(
        surface: &mut WindowSurface,
        overlay: &InputModeOverlay,
        show_overlay: bool,
        stats: &mut FrameStats,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut buffer = surface.buffer_mut()?;
        {
            let mut screen = Screen::new(&mut buffer, WINDOW_WIDTH, WINDOW_HEIGHT)?;
            frame::compose(&mut screen, overlay, show_overlay, stats);
        }
        buffer.present()?;
        Ok(())
    }
}

pub fn run(
    overlay: InputModeOverlay,
    show_overlay: bool,
    max_frames: Option<u64>,
) -> Result<FrameStats, Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    let mut app = OverlayDisplay::new(overlay, show_overlay, max_frames);
    event_loop.run_app(&mut app)?;
    Ok(app.stats())
}
