// What you SEE:
// • Live (mirrored) camera, dimmed toward a dark void so the overlay pops.
// • A cyberpunk HUD locked to your hand: glowing core, fingertip trails, a power gauge,
//   a sweeping scan line, and orbital rings once the energy crosses half.
// • Without a landmark model, the mouse stands in for the hand:
//   move to aim, hold Left Mouse to clench the fist (energy rises), release to spread.
// • ESC or Q quits.

use cyber_hand::backdrop::Backdrop;
use cyber_hand::camera::CameraCapture;
use cyber_hand::constants::{BACKDROP_DARKEN, CAMERA_INDEX, CAPTURE_HEIGHT, CAPTURE_WIDTH, MAX_HANDS};
use cyber_hand::detector::{HandDetector, PointerHand};
use cyber_hand::draw::{draw_text, Drawer};
use cyber_hand::palette;
use cyber_hand::{Error, Hud};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    /* --- Camera + window setup ---
       Visual: window opens with live camera feed. */
    let mut cam = CameraCapture::new(CAMERA_INDEX, CAPTURE_WIDTH, CAPTURE_HEIGHT)?;
    let (w, h) = cam.resolution();
    let mut drawer = Drawer::new("Cyber Hand HUD", w as usize, h as usize)?;

    let backdrop = Backdrop::new(palette::VOID, BACKDROP_DARKEN);
    let mut detector = PointerHand::new();
    // One HUD per tracked hand; MAX_HANDS is 1.
    let mut hud = Hud::new();

    /* --- Status line / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut fps_text = String::from("FPS: 0.0");

    info!("running at {w}x{h}; hold LMB to charge, ESC or Q to quit");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.quit_requested() {
        // 1) Fresh mirrored frame, dimmed toward the void.
        let mut screen = cam.next_frame()?;
        backdrop.apply(&mut screen);

        // 2) Hands for this frame.
        detector.set_pointer(drawer.mouse_pos(), drawer.left_mouse_down());
        let hands = detector.detect(&screen)?;
        if hands.len() > MAX_HANDS {
            warn!("{} hands detected, drawing the first {MAX_HANDS}", hands.len());
        }

        // 3) HUD per hand; with no hand the HUD state stays frozen this frame.
        for hand in hands.iter().take(MAX_HANDS) {
            let readout = hud.update(&mut screen, hand);
            debug!(
                "tick {} energy {:.3} core {} armed {} locked {} skipped {:?}",
                readout.tick,
                readout.energy_level,
                readout.core_size,
                readout.armed,
                readout.target_locked,
                readout.skipped
            );
        }

        // 4) Status line, then present.
        let status = format!("{} | HANDS: {}", fps_text, hands.len().min(MAX_HANDS));
        draw_text(&mut screen, 8, 8, &status, 1, palette::TEXT);
        drawer.present(&screen)?;

        // 5) FPS counter (logged + shown once per second)
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            info!("FPS: {:.1}", fps);
            fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("window closed after {} HUD ticks", hud.ticks());
    Ok(())
}
