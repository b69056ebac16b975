use {
    base::{Vec2, init_stdout_logger},
    image::{image_to_u32, resize},
    minifb::{Key, Window, WindowOptions},
    video::VideoSource,
};

const DISPLAY_SIZE: Vec2<usize> = Vec2::new(800, 600);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger(log::LevelFilter::Info);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: play <video.mjpeg | video.gif | frames-dir>");
        std::process::exit(2);
    };

    let mut source = video::open(&path)?;
    log::info!("playing {path}, {:?} frames", source.frame_count());

    let mut window = Window::new(
        "Video - ESC to exit",
        DISPLAY_SIZE.x,
        DISPLAY_SIZE.y,
        WindowOptions::default(),
    )?;
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame = source.read_looping()?;
        let frame = resize(&frame, DISPLAY_SIZE);
        window.update_with_buffer(&image_to_u32(&frame), DISPLAY_SIZE.x, DISPLAY_SIZE.y)?;
    }

    Ok(())
}
