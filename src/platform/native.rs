//! Native window and event pump (winit)
//!
//! winit pushes events into an `ApplicationHandler`; the game wants to pull
//! them once per frame. `pump_app_events` with a zero timeout bridges the two:
//! each poll drains whatever the OS queued and returns immediately.

use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::EventSource;
use super::input::{InputEvent, Key};
use crate::error::StartupError;
use crate::renderer::RenderState;
use crate::settings::Settings;

/// Startup pumps allowed before giving up on the window
const MAX_STARTUP_PUMPS: u32 = 16;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Collects window events between polls
struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    pending: Vec<InputEvent>,
    error: Option<StartupError>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);

        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.error = Some(StartupError::Window(e)),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(event) = translate(&event) {
            self.pending.push(event);
        }
    }
}

/// Map a winit window event to the game's input vocabulary
fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            ..
        } => Some(InputEvent::PointerPress),
        WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
            let key = match event.physical_key {
                PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
                _ => Key::Other,
            };
            Some(InputEvent::KeyPress(key))
        }
        WindowEvent::CloseRequested => Some(InputEvent::WindowCloseRequested),
        WindowEvent::Resized(size) => Some(InputEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

/// Event source backed by the native window's event loop
pub struct NativeEvents {
    event_loop: EventLoop<()>,
    app: App,
}

impl EventSource for NativeEvents {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app);
        out.append(&mut self.app.pending);

        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {}", code);
            out.push(InputEvent::WindowCloseRequested);
        }
    }
}

/// Open the game window and bring up the GPU.
///
/// Any failure here is fatal: the run never starts.
pub fn open(settings: &Settings) -> Result<(NativeEvents, RenderState), StartupError> {
    let mut event_loop = EventLoop::new().map_err(StartupError::EventLoop)?;
    let mut app = App {
        settings: settings.clone(),
        window: None,
        pending: Vec::new(),
        error: None,
    };

    // The window is created from `resumed`, delivered by the first pumps
    for _ in 0..MAX_STARTUP_PUMPS {
        let status = event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut app);
        if let Some(e) = app.error.take() {
            return Err(e);
        }
        if app.window.is_some() || matches!(status, PumpStatus::Exit(_)) {
            break;
        }
    }
    let window = app.window.clone().ok_or(StartupError::NoWindow)?;

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(window.clone())
        .map_err(StartupError::Surface)?;

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .map_err(StartupError::Adapter)?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let size = window.inner_size();
    let render_state = pollster::block_on(RenderState::new(
        surface,
        &adapter,
        size.width.max(1),
        size.height.max(1),
        settings.vsync,
    ))?;

    Ok((NativeEvents { event_loop, app }, render_state))
}
