// FX: the compositing primitives the HUD is layered from, all software-drawn.
// Visual outcomes:
// - bloom: a soft translucent glow disc blended over whatever is underneath.
// - orbital rings: three concentric rings of rotating arc segments.
// - gauge bar: a vertical power meter that fills bottom-up and shifts green -> red.
// - scan line: a dim horizontal sweep that flags "TARGET LOCKED" when it crosses the palm.

use crate::constants::{
    GAUGE_HEIGHT, GAUGE_WIDTH, RING_ARC_PERIOD_DEG, RING_ARC_SPAN_DEG, RING_LAYERS, RING_THICKNESS,
    SCAN_LOCK_DISTANCE, SCAN_PERIOD, SCAN_SPEED,
};
use crate::draw::{disc_pixels, draw_arc, draw_line, draw_rect, draw_text, fill_rect, text_width};
use crate::palette::{self, gauge_color, SCAN, SCAN_LINE, TEXT};
use crate::types::{FrameBuffer, Point2D};

// ----------------------------- blending helper --------------------------------

/// Alpha-blend one color onto the pixel at (x,y): `color*a + old*(1-a)` per channel.
/// Visual: the pixel takes on some of `color` while the video still shows through.
#[inline]
fn blend_rgb(fb: &mut FrameBuffer, x: i32, y: i32, color: (u8, u8, u8), a: f32) {
    if x < 0 || y < 0 { return; }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height { return; }

    let idx = y * fb.width + x;
    let (or, og, ob) = palette::unpack(fb.pixels[idx]);
    let inv = 1.0 - a;
    let mix = |c: u8, o: u8| (c as f32 * a + o as f32 * inv).round().clamp(0.0, 255.0) as u8;

    fb.pixels[idx] = palette::pack(mix(color.0, or), mix(color.1, og), mix(color.2, ob));
}

// ----------------------------- bloom ------------------------------------

/// Glow disc: a filled disc of `radius` blended over the canvas with weight `intensity`.
/// Outside the disc a blended copy would equal the canvas, so only disc pixels are touched.
/// No-op if `radius <= 0`.
pub fn bloom(fb: &mut FrameBuffer, center: Point2D, radius: i32, color: u32, intensity: f32) {
    if radius <= 0 { return; }
    let a = intensity.clamp(0.0, 1.0);
    let rgb = palette::unpack(color);
    disc_pixels(center, radius, |x, y| blend_rgb(fb, x, y, rgb, a));
}

// ----------------------------- orbital rings ------------------------------------

/// Start angle of a ring layer at `tick`, in [0, 360). Negative speeds spin the other way.
pub fn ring_phase(tick: u64, speed: i32) -> i32 {
    (tick as i64 * speed as i64).rem_euclid(360) as i32
}

/// Three concentric layers, each drawn as three 60° arcs repeating every 120°.
pub fn orbital_rings(fb: &mut FrameBuffer, center: Point2D, base_radius: i32, color: u32, tick: u64) {
    for (offset, speed) in RING_LAYERS {
        let radius = base_radius + offset;
        let start = ring_phase(tick, speed);
        for i in 0..3 {
            let s = start + i * RING_ARC_PERIOD_DEG;
            draw_arc(fb, center, radius, s, s + RING_ARC_SPAN_DEG, RING_THICKNESS, color);
        }
    }
}

// ----------------------------- gauge bar ------------------------------------

/// Filled height of the gauge for `value` in [0,1].
pub fn gauge_fill(value: f32) -> i32 {
    (GAUGE_HEIGHT as f32 * value.clamp(0.0, 1.0)).round() as i32
}

/// Vertical power gauge with top-left (x,y), filled from the bottom, labelled underneath.
pub fn gauge_bar(fb: &mut FrameBuffer, x: i32, y: i32, value: f32) {
    let fill = gauge_fill(value);
    let bottom = y + GAUGE_HEIGHT;
    fill_rect(fb, x, bottom - fill, x + GAUGE_WIDTH, bottom, gauge_color(value));
    draw_rect(fb, x, y, GAUGE_WIDTH, GAUGE_HEIGHT, TEXT);

    draw_text(fb, x - 10, bottom + 8, &gauge_label(value), 1, TEXT);
}

/// Percentage label under the gauge, rounded to the nearest percent.
pub fn gauge_label(value: f32) -> String {
    format!("PWR: {}%", (value.clamp(0.0, 1.0) * 100.0).round() as i32)
}

// ----------------------------- scan line ------------------------------------

/// Row the scan line sits on at `tick`.
pub fn scan_y(tick: u64) -> i32 {
    ((tick * SCAN_SPEED) % SCAN_PERIOD) as i32
}

/// True when the scan line is close enough to the palm to lock.
pub fn target_locked(scan_y: i32, palm_y: i32) -> bool {
    (scan_y - palm_y).abs() < SCAN_LOCK_DISTANCE
}

/// Full-width sweep line; returns whether "TARGET LOCKED" was shown.
pub fn scan_line(fb: &mut FrameBuffer, palm_y: i32, width: usize, tick: u64) -> bool {
    let y = scan_y(tick);
    let right = width as i32 - 1;
    draw_line(fb, 0, y, right, y, SCAN_LINE);

    let locked = target_locked(y, palm_y);
    if locked {
        let label = "TARGET LOCKED";
        draw_text(fb, right - text_width(label, 2) - 10, y - 18, label, 2, SCAN);
    }
    locked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{pack, unpack};

    #[test]
    fn bloom_blends_inside_disc_only() {
        let mut fb = FrameBuffer::filled(40, 40, pack(100, 100, 100));
        bloom(&mut fb, Point2D::new(20, 20), 5, pack(255, 0, 0), 0.4);
        // 255*0.4 + 100*0.6 = 162, 0*0.4 + 100*0.6 = 60
        assert_eq!(fb.get(20, 20).map(unpack), Some((162, 60, 60)));
        assert_eq!(fb.get(25, 20).map(unpack), Some((162, 60, 60)));
        assert_eq!(fb.get(26, 20).map(unpack), Some((100, 100, 100)));
        assert_eq!(fb.get(0, 0).map(unpack), Some((100, 100, 100)));
    }

    #[test]
    fn bloom_ignores_non_positive_radius() {
        let before = FrameBuffer::filled(10, 10, pack(1, 2, 3));
        let mut fb = before.clone();
        bloom(&mut fb, Point2D::new(5, 5), 0, pack(255, 255, 255), 1.0);
        bloom(&mut fb, Point2D::new(5, 5), -4, pack(255, 255, 255), 1.0);
        assert_eq!(fb.pixels, before.pixels);
    }

    #[test]
    fn bloom_at_edge_does_not_panic() {
        let mut fb = FrameBuffer::filled(10, 10, 0);
        bloom(&mut fb, Point2D::new(0, 9), 30, pack(0, 255, 255), 0.5);
        assert_eq!(fb.get(9, 0).map(unpack), Some((0, 128, 128)));
    }

    #[test]
    fn ring_phase_wraps_both_directions() {
        assert_eq!(ring_phase(0, 2), 0);
        assert_eq!(ring_phase(200, 2), 40);
        assert_eq!(ring_phase(1, -3), 357);
        assert_eq!(ring_phase(120, -3), 0);
        assert_eq!(ring_phase(725, 1), 5);
    }

    #[test]
    fn rings_draw_three_layers() {
        let mut fb = FrameBuffer::filled(300, 300, 0);
        let c = Point2D::new(150, 150);
        orbital_rings(&mut fb, c, 60, 1, 0);
        // tick 0: every layer has an arc starting at 0 degrees, i.e. to the right of center.
        for r in [60, 80, 100] {
            assert_eq!(fb.get(150 + r, 150), Some(1), "layer radius {r}");
        }
        // 90 degrees falls in the 60..120 gap of every layer.
        assert_eq!(fb.get(150, 150 + 80), Some(0));
        assert_eq!(fb.get(150, 150), Some(0));
    }

    #[test]
    fn gauge_fills_from_the_bottom() {
        assert_eq!(gauge_fill(0.0), 0);
        assert_eq!(gauge_fill(0.878), 88);
        assert_eq!(gauge_fill(1.0), 100);
        assert_eq!(gauge_fill(1.7), 100);

        let mut fb = FrameBuffer::filled(100, 160, 0);
        gauge_bar(&mut fb, 40, 20, 0.25);
        // Outline corners.
        assert_eq!(fb.get(40, 20), Some(TEXT));
        assert_eq!(fb.get(59, 119), Some(TEXT));
        // Fill spans rows 95..120; interior columns only checked.
        let fill = gauge_color(0.25);
        assert_eq!(fb.get(50, 96), Some(fill));
        assert_eq!(fb.get(50, 118), Some(fill));
        assert_eq!(fb.get(50, 90), Some(0));
    }

    #[test]
    fn gauge_label_rounds_to_percent() {
        assert_eq!(gauge_label(0.878), "PWR: 88%");
        assert_eq!(gauge_label(0.0), "PWR: 0%");
        assert_eq!(gauge_label(1.0), "PWR: 100%");
        assert_eq!(gauge_label(1.3), "PWR: 100%");
        assert_eq!(gauge_label(0.124), "PWR: 12%");
    }

    #[test]
    fn scan_wraps_at_480() {
        assert_eq!(scan_y(0), 0);
        assert_eq!(scan_y(95), 475);
        assert_eq!(scan_y(96), 0);
        assert_eq!(scan_y(100), 20);
    }

    #[test]
    fn lock_is_strictly_within_fifty() {
        assert!(target_locked(300, 300));
        assert!(target_locked(349, 300));
        assert!(!target_locked(350, 300));
        assert!(!target_locked(250, 300));
        assert!(target_locked(251, 300));
    }

    #[test]
    fn scan_line_spans_full_width() {
        let mut fb = FrameBuffer::filled(200, 480, 0);
        let locked = scan_line(&mut fb, 400, 200, 20);
        assert!(!locked);
        for x in [0, 100, 199] {
            assert_eq!(fb.get(x, 100), Some(SCAN_LINE));
        }
        let mut fb = FrameBuffer::filled(200, 480, 0);
        assert!(scan_line(&mut fb, 120, 200, 20));
        assert!(fb.pixels.iter().any(|&p| p == SCAN));
    }
}
