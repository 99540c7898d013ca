// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the live camera image with the HUD on top.
// 2) Raster shapes the HUD is built from: lines, polylines, circles, discs, arcs, boxes.
// 3) A tiny 5x7 bitmap font (integer-scaled) for HUD labels.

use crate::error::Error;
use crate::types::{FrameBuffer, Point2D};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image (live video + HUD).
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True once ESC is held or Q is tapped; the loop exits on either.
    pub fn quit_requested(&self) -> bool {
        self.window.is_key_down(Key::Escape) || self.window.is_key_pressed(Key::Q, KeyRepeat::No)
    }

    /// Mouse position in window pixels, or None while the pointer is outside the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    /// Visual: while held, the synthetic hand closes into a fist.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }
}

/* ---------- Software drawing: pixels, lines, circles, arcs, boxes ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line appears on top of the camera image.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    bresenham(x0, y0, x1, y1, |x, y| put_pixel(fb, x, y, color));
}

fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Line with a round pen of `thickness` pixels.
/// Visual: thicker strokes for trails and ring arcs; thickness 1 is a plain Bresenham line.
pub fn draw_thick_line(fb: &mut FrameBuffer, a: Point2D, b: Point2D, thickness: i32, color: u32) {
    if thickness <= 1 {
        draw_line(fb, a.x, a.y, b.x, b.y, color);
        return;
    }
    let r = thickness as f32 / 2.0;
    bresenham(a.x, a.y, b.x, b.y, |x, y| fill_disc_f(fb, x, y, r, color));
}

/// Open polyline through `points` (no closing segment).
pub fn draw_polyline(fb: &mut FrameBuffer, points: &[Point2D], thickness: i32, color: u32) {
    for seg in points.windows(2) {
        draw_thick_line(fb, seg[0], seg[1], thickness, color);
    }
}

/// Solid disc of `radius` centered at `c`. No-op for radius < 0.
pub fn fill_disc(fb: &mut FrameBuffer, c: Point2D, radius: i32, color: u32) {
    if radius < 0 { return; }
    fill_disc_f(fb, c.x, c.y, radius as f32, color);
}

fn fill_disc_f(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: f32, color: u32) {
    let reach = radius.ceil() as i32;
    let r2 = radius * radius;
    for y in (cy - reach)..=(cy + reach) {
        for x in (cx - reach)..=(cx + reach) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Pixels of a disc, for callers that blend instead of overwrite.
pub fn disc_pixels(c: Point2D, radius: i32, mut visit: impl FnMut(i32, i32)) {
    if radius < 0 { return; }
    let r2 = radius * radius;
    for y in (c.y - radius)..=(c.y + radius) {
        for x in (c.x - radius)..=(c.x + radius) {
            let (dx, dy) = (x - c.x, y - c.y);
            if dx * dx + dy * dy <= r2 {
                visit(x, y);
            }
        }
    }
}

/// Circle outline: a ring `thickness` pixels wide centered on `radius`.
pub fn draw_circle(fb: &mut FrameBuffer, c: Point2D, radius: i32, thickness: i32, color: u32) {
    if radius < 0 || thickness <= 0 { return; }
    let half = thickness as f32 / 2.0;
    let outer = radius as f32 + half;
    let inner = (radius as f32 - half).max(0.0);
    let (o2, i2) = (outer * outer, inner * inner);
    let reach = outer.ceil() as i32;
    for y in (c.y - reach)..=(c.y + reach) {
        for x in (c.x - reach)..=(c.x + reach) {
            let dx = (x - c.x) as f32;
            let dy = (y - c.y) as f32;
            let d2 = dx * dx + dy * dy;
            if d2 <= o2 && d2 >= i2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Point on a circle at `deg` degrees, measured clockwise from +x (screen y grows downward).
pub fn point_on_circle(c: Point2D, radius: i32, deg: f32) -> Point2D {
    let t = deg.to_radians();
    Point2D::new(
        c.x + (radius as f32 * t.cos()).round() as i32,
        c.y + (radius as f32 * t.sin()).round() as i32,
    )
}

/// Circular arc from `start_deg` to `end_deg` (clockwise on screen).
pub fn draw_arc(fb: &mut FrameBuffer, c: Point2D, radius: i32, start_deg: i32, end_deg: i32, thickness: i32, color: u32) {
    if radius <= 0 || end_deg <= start_deg { return; }
    // One vertex per degree is smooth enough for the radii the HUD uses.
    let mut prev = point_on_circle(c, radius, start_deg as f32);
    for deg in (start_deg + 1)..=end_deg {
        let next = point_on_circle(c, radius, deg as f32);
        draw_thick_line(fb, prev, next, thickness, color);
        prev = next;
    }
}

/// 1-pixel rectangle outline with top-left (x,y).
pub fn draw_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 { return; }
    let (x1, y1) = (x + w - 1, y + h - 1);
    draw_line(fb, x, y, x1, y, color);
    draw_line(fb, x, y1, x1, y1, color);
    draw_line(fb, x, y, x, y1, color);
    draw_line(fb, x1, y, x1, y1, color);
}

/// Solid rectangle covering rows y0..y1 (exclusive) and columns x0..x1 (exclusive).
pub fn fill_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    for y in y0..y1 {
        for x in x0..x1 {
            put_pixel(fb, x, y, color);
        }
    }
}

/* ---------- 5x7 bitmap font (uppercase, digits, the punctuation the HUD prints) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters used by the HUD labels and the status line
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),

        // Punctuation: space, vertical bar, colon, dot, percent
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '%' => g!(0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011),

        _ => None,
    }
}

/// Fill one font cell (a `scale` x `scale` block).
fn put_cell(fb: &mut FrameBuffer, x: i32, y: i32, scale: i32, color: u32) {
    fill_rect(fb, x, y, x + scale, y + scale, color);
}

/// Draw a single 5x7 character at (x,y), each font pixel `scale` screen pixels wide.
/// Visual: a glyph with a black drop shadow for contrast against the video.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by one cell in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_cell(fb, x + (rx + 1) * scale, y + (ry as i32 + 1) * scale, scale, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_cell(fb, x + rx * scale, y + ry as i32 * scale, scale, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; (x,y) is the top-left of the first glyph.
/// Visual: each glyph is 5x7 cells with 1 cell of spacing.
pub fn draw_text(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    let scale = scale.max(1);
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += 6 * scale; // 5 cells glyph width + 1 cell spacing
    }
}

/// Horizontal advance of `text` at `scale`.
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 6 * scale.max(1)
}
