// Opens the default camera and converts frames into a buffer suitable for the window.
// Visual expectation: when main.rs calls `next_frame()`, you get a mirrored
// (selfie-view) Vec<u32> where each pixel is 0x00RRGGBB, ready to draw the HUD on.

use crate::error::Error;
use crate::palette;
use crate::types::FrameBuffer;
use log::info;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

// `image` does the RGB buffer handling and the horizontal flip.
use image::{imageops, ImageBuffer, Rgb};

// A small wrapper around nokhwa::Camera so our main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Try to open camera `index` at a target resolution (falls back if not exact).
    /// On success, nothing is shown on screen yet — we just hold an open stream.
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        // Ask for RGB frames, closest to our request.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();
        info!(
            "camera {index} streaming {}x{} (requested {width}x{height})",
            actual.width(),
            actual.height()
        );

        Ok(Self { cam, width: actual.width(), height: actual.height() })
    }

    /// Grab one frame, mirror it and convert it to 0x00RRGGBB pixels.
    /// Blocks until the camera delivers a new frame.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let mut rgb_img: ImageBuffer<Rgb<u8>, Vec<u8>> = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        // Mirror so moving your hand right moves it right on screen.
        imageops::flip_horizontal_in_place(&mut rgb_img);

        Ok(pack_rgb(&rgb_img))
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Pack an RGB image into a window-ready frame buffer.
fn pack_rgb(img: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let pixels = img.pixels().map(|p| palette::pack(p[0], p[1], p[2])).collect();
    FrameBuffer { width: w as usize, height: h as usize, pixels }
}
