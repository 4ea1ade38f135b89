use std::time::{Duration, Instant};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use attractor_core::{Session, SessionConfig};

mod input;
mod render;

use input::{Gesture, PointerTracker};
use render::GpuState;

const WINDOW_TITLE: &str = "Lorenz attractor (native)";
const STATS_INTERVAL: Duration = Duration::from_secs(2);

fn apply_gesture(session: &mut Session, gesture: Gesture) {
    match gesture {
        Gesture::Orbit(d) => session.on_drag_delta(d.x, d.y),
        Gesture::Zoom(dy) => session.on_scroll_delta(dy),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = SessionConfig::default();
    let capacity = config.capacity;
    let mut session = Session::new(config)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, capacity))?;
    let mut pointer = PointerTracker::default();
    let mut stats_since = Instant::now();
    let mut stats_frames = 0u32;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::MouseInput { state, button, .. } => pointer.mouse_button(button, state),
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(g) = pointer.cursor_moved(input::to_vec2(position)) {
                    apply_gesture(&mut session, g);
                }
            }
            WindowEvent::CursorLeft { .. } => pointer.cursor_left(),
            WindowEvent::MouseWheel { delta, .. } => {
                let g = pointer.wheel(delta);
                apply_gesture(&mut session, g);
            }
            WindowEvent::Touch(touch) => {
                if let Some(g) =
                    pointer.touch(touch.id, touch.phase, input::to_vec2(touch.location))
                {
                    apply_gesture(&mut session, g);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let payload = session.advance_frame(gpu.aspect());
            match gpu.render(&payload) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.resize(gpu.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory, exiting");
                    elwt.exit()
                }
                Err(e) => log::warn!("frame skipped: {e:?}"),
            }

            stats_frames += 1;
            let elapsed = stats_since.elapsed();
            if elapsed >= STATS_INTERVAL {
                log::debug!(
                    "[stats] {:.1} fps, points={}/{}, frame={}",
                    stats_frames as f32 / elapsed.as_secs_f32(),
                    session.store().size(),
                    capacity,
                    session.frame_count()
                );
                stats_since = Instant::now();
                stats_frames = 0;
            }
        }
        _ => {}
    })?;
    Ok(())
}
