// The HUD: turns one hand per frame into an evolving overlay.
//
// A `Hud` owns all temporal state (animation clock, fingertip trails, smoothed
// energy). Each `update` advances that state once and paints the overlay onto the
// frame in a fixed layer order, later layers on top:
//
// trails -> core bloom + core ring -> orbital rings + "SYSTEM ARMED" ->
// palm connectors + fingertip dots -> scan line -> power gauge

use crate::clock::AnimationClock;
use crate::constants::{
    ARMED_THRESHOLD, BLOOM_INTENSITY, BLOOM_MARGIN, CORE_BASE_RADIUS, CORE_RADIUS_RANGE, ENERGY_SMOOTHING,
    GAUGE_HEIGHT, GAUGE_RIGHT_MARGIN, RING_BASE_RADIUS, RING_LAYERS, TIP_DOT_RADIUS,
};
use crate::draw::{draw_circle, draw_line, draw_polyline, draw_text, fill_disc, text_width};
use crate::estimator::{GeometryError, HandGeometry};
use crate::fx::{bloom, gauge_bar, orbital_rings, scan_line};
use crate::palette::{scale_color, CORE, FLUX, SCAN, TEXT};
use crate::trail::TrailBuffer;
use crate::types::{FrameBuffer, HandLandmarks};
use log::debug;

/// Radius of the core circle for a given energy, in [20, 70].
pub fn core_size(energy: f32) -> i32 {
    CORE_BASE_RADIUS + (energy * CORE_RADIUS_RANGE).round() as i32
}

/// One low-pass step of the energy signal toward `target`.
pub fn smooth(level: f32, target: f32) -> f32 {
    level + (target - level) * ENERGY_SMOOTHING
}

/// Rings and the "SYSTEM ARMED" label only appear strictly above the threshold.
pub fn is_armed(energy: f32) -> bool {
    energy > ARMED_THRESHOLD
}

/// What a single `update` decided, for the caller's status line and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    pub tick: u64,
    pub energy_level: f32,
    pub core_size: i32,
    pub armed: bool,
    pub target_locked: bool,
    /// Set when the energy estimate failed and smoothing was skipped this frame.
    pub skipped: Option<GeometryError>,
}

pub struct Hud {
    clock: AnimationClock,
    trails: TrailBuffer,
    energy_level: f32,
}

impl Hud {
    pub fn new() -> Self {
        Self { clock: AnimationClock::new(), trails: TrailBuffer::new(), energy_level: 0.0 }
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// Advance the HUD by one hand observation and paint the overlay onto `frame`.
    pub fn update(&mut self, frame: &mut FrameBuffer, hand: &HandLandmarks) -> HudReadout {
        let tick = self.clock.tick();
        let geom = HandGeometry::from_landmarks(hand, frame.width, frame.height);
        let palm = geom.palm;

        // Trails: thicker for fingers further along the thumb -> pinky order.
        for tip in &geom.tips {
            self.trails.append(tip.finger, tip.pos);
            let pts = self.trails.snapshot(tip.finger);
            draw_polyline(frame, &pts, 1 + tip.finger.slot() as i32, FLUX);
        }

        let skipped = match geom.energy_target {
            Ok(target) => {
                self.energy_level = smooth(self.energy_level, target);
                None
            }
            Err(e) => {
                debug!("tick {tick}: energy update skipped: {e}");
                Some(e)
            }
        };
        let energy = self.energy_level;

        // Core: glow halo, then the crisp ring on top.
        let size = core_size(energy);
        let glow = scale_color(SCAN, energy);
        bloom(frame, palm, size + BLOOM_MARGIN, glow, BLOOM_INTENSITY);
        draw_circle(frame, palm, size, 2, CORE);

        let armed = is_armed(energy);
        if armed {
            orbital_rings(frame, palm, RING_BASE_RADIUS, FLUX, tick);
            let label = "SYSTEM ARMED";
            let outer = RING_BASE_RADIUS + RING_LAYERS[2].0;
            draw_text(frame, palm.x - text_width(label, 2) / 2, palm.y - outer - 30, label, 2, FLUX);
        }

        for tip in &geom.tips {
            draw_line(frame, palm.x, palm.y, tip.pos.x, tip.pos.y, TEXT);
            fill_disc(frame, tip.pos, TIP_DOT_RADIUS, CORE);
        }

        let (width, height) = (frame.width, frame.height);
        let target_locked = scan_line(frame, palm.y, width, tick);

        let gx = width as i32 - GAUGE_RIGHT_MARGIN;
        let gy = height as i32 / 2 - GAUGE_HEIGHT / 2;
        gauge_bar(frame, gx, gy, energy);

        HudReadout { tick, energy_level: energy, core_size: size, armed, target_locked, skipped }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::tests::hand_with;
    use crate::estimator::Finger;
    use crate::types::{Landmark, Point2D};

    impl Hud {
        fn energy_level(&self) -> f32 {
            self.energy_level
        }

        fn trail(&self, finger: Finger) -> Vec<Point2D> {
            self.trails.snapshot(finger)
        }
    }

    fn closed_fist() -> HandLandmarks {
        let c = (0.5, 0.5);
        hand_with(c, [c; 5])
    }

    fn open_hand() -> HandLandmarks {
        let tips = [(0.0, 0.5), (0.1, 0.0), (0.5, 0.0), (0.9, 0.0), (1.0, 0.5)];
        hand_with((0.5, 1.0), tips)
    }

    #[test]
    fn core_size_spans_twenty_to_seventy() {
        assert_eq!(core_size(0.0), 20);
        assert_eq!(core_size(1.0), 70);
        let mut last = core_size(0.0);
        for i in 0..=100 {
            let s = core_size(i as f32 / 100.0);
            assert!((20..=70).contains(&s));
            assert!(s >= last);
            last = s;
        }
    }

    #[test]
    fn smoothing_fixed_point_and_gain() {
        assert_eq!(smooth(0.3, 0.3), 0.3);
        assert!((smooth(0.0, 1.0) - 0.1).abs() < 1e-7);
        assert!((smooth(1.0, 0.0) - 0.9).abs() < 1e-7);
    }

    #[test]
    fn armed_threshold_is_exclusive() {
        assert!(!is_armed(0.5));
        assert!(is_armed(0.5001));
        assert!(!is_armed(0.0));
    }

    #[test]
    fn open_hand_keeps_energy_at_rest() {
        let mut hud = Hud::new();
        let mut frame = FrameBuffer::filled(800, 600, 0);
        for _ in 0..5 {
            let r = hud.update(&mut frame, &open_hand());
            assert_eq!(r.energy_level, 0.0);
            assert!(!r.armed);
        }
        assert_eq!(hud.ticks(), 5);
    }

    #[test]
    fn constant_target_converges_geometrically() {
        let mut hud = Hud::new();
        let mut frame = FrameBuffer::filled(320, 240, 0);
        let mut prev = 0.0;
        for n in 1..=30 {
            let r = hud.update(&mut frame, &closed_fist());
            let expected = 1.0 - 0.9_f32.powi(n);
            assert!((r.energy_level - expected).abs() < 1e-4, "step {n}: {} vs {expected}", r.energy_level);
            assert!(r.energy_level > prev);
            prev = r.energy_level;
        }
    }

    #[test]
    fn twenty_closed_frames_on_800x600() {
        let mut hud = Hud::new();
        let mut first_armed = None;
        let mut last = None;
        for n in 1..=20u64 {
            let mut frame = FrameBuffer::filled(800, 600, 0);
            let r = hud.update(&mut frame, &closed_fist());
            if r.armed && first_armed.is_none() {
                first_armed = Some(n);
            }
            // Once armed, stays armed while energy keeps rising.
            if first_armed.is_some() {
                assert!(r.armed);
            }
            last = Some(r);
        }
        let r = last.unwrap();
        assert!((r.energy_level - 0.878).abs() < 1e-3, "energy {}", r.energy_level);
        assert_eq!(r.core_size, 64);
        assert_eq!(r.tick, 20);
        // 1 - 0.9^7 = 0.522 is the first value above 0.5.
        assert_eq!(first_armed, Some(7));
    }

    #[test]
    fn failed_estimate_freezes_energy_but_not_clock() {
        let mut hud = Hud::new();
        let mut frame = FrameBuffer::filled(640, 480, 0);
        hud.update(&mut frame, &closed_fist());
        let before = hud.energy_level();

        let mut pts = vec![Landmark::new(0.5, 0.5); 21];
        pts[8] = Landmark::new(0.5, f32::NAN);
        let bad = HandLandmarks::new(pts).unwrap();
        let r = hud.update(&mut frame, &bad);

        assert_eq!(r.skipped, Some(GeometryError::NonFinite(8)));
        assert_eq!(hud.energy_level(), before);
        assert_eq!(hud.ticks(), 2);
    }

    #[test]
    fn trails_follow_finger_identity() {
        let mut hud = Hud::new();
        let mut frame = FrameBuffer::filled(100, 100, 0);
        for i in 0..12 {
            // Pixel centers, so truncation lands exactly on column i.
            let x = (i as f32 + 0.5) / 100.0;
            let hand = hand_with((0.5, 0.5), [(x, 0.1), (x, 0.2), (x, 0.3), (x, 0.4), (x, 0.5)]);
            hud.update(&mut frame, &hand);
        }
        let thumb = hud.trail(Finger::Thumb);
        assert_eq!(thumb.len(), 10);
        assert_eq!(thumb.first(), Some(&Point2D::new(2, 10)));
        assert_eq!(thumb.last(), Some(&Point2D::new(11, 10)));
        assert!(hud.trail(Finger::Pinky).iter().all(|p| p.y == 50));
    }

    #[test]
    fn trail_strokes_widen_from_thumb_to_pinky() {
        // Tips on separate rows well above the palm; they slide right between two frames.
        let rows = [40, 80, 120, 160, 200];
        let at = |x: i32| rows.map(|y| ((x as f32 + 0.5) / 400.0, (y as f32 + 0.5) / 400.0));
        let palm = (200.5 / 400.0, 380.5 / 400.0);

        let mut hud = Hud::new();
        hud.update(&mut FrameBuffer::filled(400, 400, 0), &hand_with(palm, at(80)));
        let mut frame = FrameBuffer::filled(400, 400, 0);
        hud.update(&mut frame, &hand_with(palm, at(240)));

        // Column 140 is crossed only by the trails (connectors and dots sit at x >= 200).
        let extent = |row: i32| (row - 6..=row + 6).filter(|&y| frame.get(140, y) == Some(FLUX)).count();
        let widths = rows.map(extent);

        assert_eq!(widths[Finger::Thumb.slot()], 1);
        assert!(widths[Finger::Pinky.slot()] > widths[Finger::Thumb.slot()], "widths {widths:?}");
        assert!(widths.windows(2).all(|w| w[0] <= w[1]), "widths {widths:?}");
    }

    #[test]
    fn far_off_landmarks_do_not_overflow() {
        let far = (1e9, -1e9);
        let hand = hand_with((0.5, 0.5), [far, (0.5, 2e9), far, (-3e9, 0.1), far]);
        let mut hud = Hud::new();
        let mut frame = FrameBuffer::filled(320, 240, 0);
        let r = hud.update(&mut frame, &hand);
        assert_eq!(r.tick, 1);
        assert!(r.skipped.is_none());
    }

    #[test]
    fn overlay_layers_land_on_the_frame() {
        let mut hud = Hud::new();
        let mut frame = FrameBuffer::filled(800, 600, 0);
        let r = hud.update(&mut frame, &closed_fist());
        // Core ring around the palm at (400,300).
        assert_eq!(frame.get(400 + r.core_size, 300), Some(CORE));
        // Fingertip dot drawn last over the palm.
        assert_eq!(frame.get(400, 300), Some(CORE));
        // Gauge outline at its fixed anchor.
        assert_eq!(frame.get(800 - GAUGE_RIGHT_MARGIN, 250), Some(TEXT));
        // Scan line at tick 1 sits on row 5.
        assert_eq!(frame.get(10, 5), Some(crate::palette::SCAN_LINE));
    }
}
