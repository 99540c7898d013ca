// Fixed tuning constants for the HUD and the capture loop.

/// Recent positions kept per fingertip trail
pub const TRAIL_CAPACITY: usize = 10;

/// First-order low-pass gain applied to the energy signal each frame
pub const ENERGY_SMOOTHING: f32 = 0.1;

/// Fraction of the frame area that counts as a fully spread hand
pub const MAX_SPREAD_FRACTION: f64 = 0.08;

/// Energy above which the orbital rings arm
pub const ARMED_THRESHOLD: f32 = 0.5;

/// Core circle radius: base + round(energy * range)
pub const CORE_BASE_RADIUS: i32 = 20;
pub const CORE_RADIUS_RANGE: f32 = 50.0;
/// Extra radius of the bloom halo around the core
pub const BLOOM_MARGIN: i32 = 10;
/// Copy weight used when compositing the core bloom
pub const BLOOM_INTENSITY: f32 = 0.4;

/// Orbital rings: base radius, per-layer radius offsets and angular speeds (deg/tick)
pub const RING_BASE_RADIUS: i32 = 60;
pub const RING_LAYERS: [(i32, i32); 3] = [(0, 2), (20, -3), (40, 1)];
pub const RING_ARC_SPAN_DEG: i32 = 60;
pub const RING_ARC_PERIOD_DEG: i32 = 120;
pub const RING_THICKNESS: i32 = 2;

/// Scan line sweep: pixels per tick and wrap period
pub const SCAN_SPEED: u64 = 5;
pub const SCAN_PERIOD: u64 = 480;
/// Palm distance under which the scan line reports a lock
pub const SCAN_LOCK_DISTANCE: i32 = 50;

/// Gauge bar geometry
pub const GAUGE_WIDTH: i32 = 20;
pub const GAUGE_HEIGHT: i32 = 100;
/// Gauge anchor, measured from the right edge and the vertical center
pub const GAUGE_RIGHT_MARGIN: i32 = 60;

/// Fingertip marker and connector
pub const TIP_DOT_RADIUS: i32 = 4;

/// Capture resolution requested from the camera
pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;
pub const CAMERA_INDEX: u32 = 0;

/// Hands processed per frame
pub const MAX_HANDS: usize = 1;

/// How strongly the camera image is pulled toward the void color
pub const BACKDROP_DARKEN: f32 = 0.4;
