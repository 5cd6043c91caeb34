// keytick-probe: keyboard probe window for the keytick timer table.
//
// Opens a window, forwards its keyboard events into a KeyTimerManager,
// advances the table once per frame and logs every transition the query
// API reports. Escape exits.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, anyhow};
use clap::Parser;
use keytick::{Key, KeyEventSink, KeyTimerConfig, KeyTimerManager};
use keytick_winit::forward_window_event;
use log::info;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Parser, Debug)]
#[command(name = "keytick-probe", about = "Keyboard probe for the keytick timer table")]
struct Args {
    /// Path to config JSON file.
    #[arg(long, default_value = "keytick.json")]
    config: PathBuf,

    /// Let key events propagate to the platform instead of swallowing them.
    #[arg(long)]
    pass_through: bool,
}

struct ProbeApp {
    manager: KeyTimerManager,
    sink: KeyEventSink,
    window: Option<Window>,
    last_frame: Instant,
    /// Last observed hold duration per key code, reported at release
    /// (the timer itself no longer carries it by then).
    held_secs: [f64; KeyTimerManager::SIZE],
}

impl ProbeApp {
    fn new(manager: KeyTimerManager) -> Self {
        let sink = manager.sink();
        Self {
            manager,
            sink,
            window: None,
            last_frame: Instant::now(),
            held_secs: [0.0; KeyTimerManager::SIZE],
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.manager.advance(delta);

        for key in Key::ALL {
            let slot = key.code() as usize;
            if self.manager.is_new_key_press(key) {
                info!("{key:?} pressed");
            }
            if self.manager.is_key_down(key) {
                self.held_secs[slot] = self.manager.time_pressed(key);
            }
            if self.manager.is_new_key_release(key) {
                info!("{key:?} released after {:.0} ms", self.held_secs[slot] * 1000.0);
                self.held_secs[slot] = 0.0;
            }
        }
    }
}

impl ApplicationHandler for ProbeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes().with_title("keytick probe");
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    window.request_redraw();
                    self.window = Some(window);
                }
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.tick();
                if self.manager.is_new_key_press(Key::Escape) {
                    info!(
                        "escape pressed, exiting after {:.1}s",
                        self.manager.game_time()
                    );
                    event_loop.exit();
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                forward_window_event(&self.sink, other);
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match KeyTimerConfig::read(&args.config) {
        Ok(config) => {
            info!("loaded config from {}", args.config.display());
            config
        }
        Err(_) => {
            info!("no config at {}, using defaults", args.config.display());
            KeyTimerConfig::default()
        }
    };
    if args.pass_through {
        config.swallow_input = false;
    }

    let manager = KeyTimerManager::with_config(config);
    let mut app = ProbeApp::new(manager);

    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("event loop error: {e}"))?;

    Ok(())
}
