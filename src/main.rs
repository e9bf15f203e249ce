use raywalk::capture;
use raywalk::prelude::*;
use raywalk::window::{TIME_SCALE_DIVISOR, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), String> {
    let mut window = Window::new("raywalk", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut input = InputState::default();
    let mut limiter = FrameLimiter::new(&window);
    let mut fps = FpsCounter::new(&window);
    let mut capture_index = 0u32;

    loop {
        // Process input
        match window.poll_events(&mut input) {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
            }
            WindowEvent::None => {}
        }

        // Update
        let delta_ms = limiter.wait_and_get_delta(&window);
        let dt = delta_ms as f32 / TIME_SCALE_DIVISOR;
        engine.update(&input, dt);

        // Render
        engine.render();

        if input.capture_requested {
            let path = format!("raywalk-{capture_index:03}.png");
            match capture::save_frame(&path, engine.pixels(), engine.width(), engine.height()) {
                Ok(()) => {
                    println!("captured {path}");
                    capture_index += 1;
                }
                Err(e) => eprintln!("capture failed: {e}"),
            }
        }

        if let Some(rate) = fps.frame(&window) {
            window.set_title(&format!("raywalk ({rate} fps)"))?;
        }

        window.present(engine.frame_buffer())?;
    }

    Ok(())
}
