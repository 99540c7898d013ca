// Darkens the live camera image toward the void color so the HUD pops.
// The mix happens in linear light (no muddy midtones), but since the target color and
// strength never change we bake the whole thing into one 256-entry table per channel.

use crate::palette;
use crate::types::FrameBuffer;

#[inline]
fn srgb_u8_to_linear(c: u8) -> f32 {
    // Convert 0..255 to 0..1 sRGB, then to linear light
    let c = (c as f32) / 255.0;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

#[inline]
fn linear_to_srgb_u8(l: f32) -> u8 {
    // Convert linear 0..1 back to sRGB 0..255
    let l = l.clamp(0.0, 1.0);
    let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
    (s * 255.0).round().clamp(0.0, 255.0) as u8
}

pub struct Backdrop {
    // [channel][input value] -> darkened value; channel 0 = R, 1 = G, 2 = B
    lut: [[u8; 256]; 3],
}

impl Backdrop {
    /// Build the tables once at startup. `strength` 0 keeps the video, 1 paints solid `target`.
    pub fn new(target: u32, strength: f32) -> Self {
        let a = strength.clamp(0.0, 1.0);
        let (tr, tg, tb) = palette::unpack(target);
        let mut lut = [[0u8; 256]; 3];
        for (ch, t) in [tr, tg, tb].into_iter().enumerate() {
            let t_lin = srgb_u8_to_linear(t);
            for v in 0..=255u8 {
                let mixed = a * t_lin + (1.0 - a) * srgb_u8_to_linear(v);
                lut[ch][v as usize] = linear_to_srgb_u8(mixed);
            }
        }
        Self { lut }
    }

    /// Visual: the whole frame dims toward the void color.
    pub fn apply(&self, fb: &mut FrameBuffer) {
        for px in &mut fb.pixels {
            let (r, g, b) = palette::unpack(*px);
            *px = palette::pack(
                self.lut[0][r as usize],
                self.lut[1][g as usize],
                self.lut[2][b as usize],
            );
        }
    }
}
