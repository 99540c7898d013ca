// "Cyberpunk" palette, packed as 0x00RRGGBB. Shared read-only by every draw call.

pub const VOID: u32 = 0x00_0F_0F_14; // background void
pub const CORE: u32 = 0x00_00_FF_FF; // core cyan
pub const FLUX: u32 = 0x00_00_64_FF; // flux blue
pub const SCAN: u32 = 0x00_FF_32_32; // scan red
pub const TEXT: u32 = 0x00_C8_C8_C8; // text gray

/// Dim green of the sweeping scan line.
pub const SCAN_LINE: u32 = 0x00_00_64_00;

#[inline]
pub fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn unpack(c: u32) -> (u8, u8, u8) {
    (((c >> 16) & 0xFF) as u8, ((c >> 8) & 0xFF) as u8, (c & 0xFF) as u8)
}

/// Scale every channel by `k` (clamped to [0,1]).
pub fn scale_color(c: u32, k: f32) -> u32 {
    let k = k.clamp(0.0, 1.0);
    let (r, g, b) = unpack(c);
    let s = |v: u8| (v as f32 * k).round() as u8;
    pack(s(r), s(g), s(b))
}

/// Gauge fill: green at 0, red at 1.
// Red rises with `value` on purpose; do not reorder to (0, g, b).
pub fn gauge_color(value: f32) -> u32 {
    let v = value.clamp(0.0, 1.0);
    pack((255.0 * v) as u8, (255.0 * (1.0 - v)) as u8, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_roundtrip_of_palette() {
        assert_eq!(unpack(SCAN), (255, 50, 50));
        assert_eq!(pack(0, 100, 255), FLUX);
    }

    #[test]
    fn scaling_dims_toward_black() {
        assert_eq!(scale_color(SCAN, 0.0), 0);
        assert_eq!(scale_color(SCAN, 1.0), SCAN);
        assert_eq!(unpack(scale_color(SCAN, 0.5)), (128, 25, 25));
    }

    #[test]
    fn gauge_goes_green_to_red() {
        assert_eq!(gauge_color(0.0), 0x00_00_FF_00);
        assert_eq!(gauge_color(1.0), 0x00_FF_00_00);
    }
}
