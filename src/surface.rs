//! Drawing-surface collaborators
//!
//! The simulation only needs a tiny capability set from its host: a surface
//! with primitive fill calls and size queries, a frame host that hands out
//! fresh surfaces and presents them, and a sleep primitive for frame pacing.
//! `SoftCanvas` is a plain in-memory rasterizer that stands in for a real
//! window back end and doubles as the test surface.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack to 0xRRGGBBAA for the software framebuffer
    pub const fn to_rgba(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | 0xff
    }
}

/// Primitive draw calls the simulation issues each frame
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Set the color used by subsequent fill calls
    fn set_color(&mut self, color: Color);
    /// Fill a circle centered at (x, y)
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32);
    /// Fill an axis-aligned rectangle with top-left corner (x, y)
    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);
}

/// Software canvas: fills shapes into an RGBA pixel buffer
#[derive(Debug, Clone)]
pub struct SoftCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    color: Color,
}

impl SoftCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE.to_rgba(); (width * height) as usize],
            color: Color::BLACK,
        }
    }

    /// Reset every pixel to the given color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba());
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), if inside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }

    fn put(&mut self, x: i32, y: i32, rgba: u32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = rgba;
        }
    }
}

impl Canvas for SoftCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) {
        if radius < 0 {
            return;
        }
        let rgba = self.color.to_rgba();
        let r = radius;
        let r2 = i64::from(r) * i64::from(r);
        for dy in -r..=r {
            for dx in -r..=r {
                if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy) <= r2 {
                    self.put(x + dx, y + dy, rgba);
                }
            }
        }
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let rgba = self.color.to_rgba();
        for py in y..y + height.max(0) {
            for px in x..x + width.max(0) {
                self.put(px, py, rgba);
            }
        }
    }
}

/// Frame host: owns the surface, hands out a cleared one per frame and
/// presents it. Headless stand-in for a real window event loop.
#[derive(Debug)]
pub struct Window {
    title: String,
    canvas: SoftCanvas,
    frames_shown: u64,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        log::info!("opening {width}x{height} window \"{title}\"");
        Self {
            title: title.to_owned(),
            canvas: SoftCanvas::new(width, height),
            frames_shown: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A fresh surface for the next frame
    pub fn frame(&mut self) -> &mut SoftCanvas {
        self.canvas.clear(Color::WHITE);
        &mut self.canvas
    }

    /// Surface access without clearing (spawn validation queries its size)
    pub fn surface(&self) -> &SoftCanvas {
        &self.canvas
    }

    /// Present the drawn frame
    pub fn show(&mut self) {
        self.frames_shown += 1;
        log::trace!("{}: frame {} presented", self.title, self.frames_shown);
    }

    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }
}

/// Blocking frame pacing
#[derive(Debug, Default)]
pub struct Sleeper;

impl Sleeper {
    pub fn new() -> Self {
        Self
    }

    pub fn sleep_for(&self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }
}
