// Crate-wide error type. Every variant states *where* things went wrong.
// Only the outer loop (window, camera, detector input) can fail; the HUD itself never does.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("Camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
    #[error("Landmark error: expected at least {expected} landmarks, got {got}")]
    Landmarks { expected: usize, got: usize }, // Detector handed us a short hand
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_stage() {
        let e = Error::CameraFrame("Decode RGB: bad".into());
        assert_eq!(e.to_string(), "Camera frame error: Decode RGB: bad");

        let e = Error::Landmarks { expected: 21, got: 3 };
        assert_eq!(e.to_string(), "Landmark error: expected at least 21 landmarks, got 3");
    }
}
