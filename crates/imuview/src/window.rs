use {
    crate::*,
    base::{Mat3, Vec2},
    image::{Image, image_to_u32, resize},
    minifb::{Key, KeyRepeat, ScaleMode, Window, WindowOptions},
};

// tile order in the 2x2 grid, row-major
const MODEL_TILE: usize = 0;

fn tile_for(sink: VideoSink) -> usize {
    match sink {
        VideoSink::Annotated => 1,
        VideoSink::ReferenceTopDown => 2,
        VideoSink::AdjustedTopDown => 3,
    }
}

/// Keyboard bindings.
pub fn action_for_key(key: Key) -> Option<UserAction> {
    match key {
        Key::C => Some(UserAction::ToggleConnection),
        Key::R => Some(UserAction::ResetZero),
        Key::P | Key::Space => Some(UserAction::PlayVideo),
        Key::Escape => Some(UserAction::Quit),
        _ => None,
    }
}

/// A minifb window showing the cube and the three video views as a 2x2
/// grid of `tile`-sized panels. Text-sink lines go to the log.
pub struct WindowHost {
    window: Window,
    tile: Vec2<usize>,
    canvas: Vec<u32>,
    dirty: bool,
}

impl WindowHost {
    pub fn new(title: &str, tile: Vec2<usize>) -> Result<Self, minifb::Error> {
        let size = Vec2::new(tile.x * 2, tile.y * 2);
        let window = Window::new(
            &format!("{title} - C connect, R reset, P play, ESC exit"),
            size.x,
            size.y,
            WindowOptions {
                resize: true,
                scale_mode: ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )?;
        Ok(Self {
            window,
            tile,
            canvas: vec![0; size.area()],
            dirty: true,
        })
    }

    fn blit(&mut self, slot: usize, image: &Image) {
        let pixels = if image.size == self.tile {
            image_to_u32(image)
        } else {
            image_to_u32(&resize(image, self.tile))
        };
        let stride = self.tile.x * 2;
        let origin_x = (slot % 2) * self.tile.x;
        let origin_y = (slot / 2) * self.tile.y;
        for (row, line) in pixels.chunks_exact(self.tile.x).enumerate() {
            let start = (origin_y + row) * stride + origin_x;
            self.canvas[start..start + self.tile.x].copy_from_slice(line);
        }
        self.dirty = true;
    }

    fn present(&mut self) {
        let result = if self.dirty {
            self.dirty = false;
            self.window
                .update_with_buffer(&self.canvas, self.tile.x * 2, self.tile.y * 2)
        } else {
            self.window.update();
            Ok(())
        };
        if let Err(error) = result {
            log::warn!("window: {error}");
        }
    }
}

impl Host for WindowHost {
    fn is_alive(&mut self) -> bool {
        self.window.is_open()
    }

    fn poll_actions(&mut self) -> Vec<UserAction> {
        self.present();
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(action_for_key)
            .collect()
    }

    fn show_model(&mut self, _rotation: &Mat3<f64>, view: &Image) {
        self.blit(MODEL_TILE, view);
    }

    fn show_frame(&mut self, sink: VideoSink, frame: &Image) {
        self.blit(tile_for(sink), frame);
    }

    fn log(&mut self, line: &str) {
        log::info!("{line}");
    }
}
