//! Perceptually-ordered colormap for depth highlighting.

use once_cell::sync::Lazy;

/// Anchor colors for the viridis-family scale, keyed by 8-bit intensity.
/// Perceived lightness increases monotonically from the first anchor to
/// the last.
const VIRIDIS_ANCHORS: [(u8, [u8; 3]); 9] = [
    (0, [68, 1, 84]),
    (32, [72, 40, 120]),
    (64, [62, 74, 137]),
    (96, [49, 104, 142]),
    (128, [38, 130, 142]),
    (160, [31, 158, 137]),
    (192, [53, 183, 121]),
    (224, [109, 205, 89]),
    (255, [253, 231, 37]),
];

/// The shared viridis-family palette, computed once per process.
pub static VIRIDIS: Lazy<Palette> = Lazy::new(Palette::viridis);

/// A 256-entry colormap lookup table indexed by 8-bit intensity.
///
/// Precomputing the full table makes every lookup a plain array index, so
/// colorizing is reproducible bit-for-bit across runs and needs no
/// intermediate rendering surface.
#[derive(Debug, Clone)]
pub struct Palette {
    table: [[u8; 3]; 256],
}

impl Palette {
    /// Build the viridis-family palette by linear interpolation between
    /// the anchor colors.
    fn viridis() -> Self {
        let mut table = [[0u8; 3]; 256];
        for window in VIRIDIS_ANCHORS.windows(2) {
            let (lo, lo_rgb) = window[0];
            let (hi, hi_rgb) = window[1];
            for i in lo..=hi {
                let t = (i - lo) as f32 / (hi - lo) as f32;
                table[i as usize] = [
                    lerp_channel(lo_rgb[0], hi_rgb[0], t),
                    lerp_channel(lo_rgb[1], hi_rgb[1], t),
                    lerp_channel(lo_rgb[2], hi_rgb[2], t),
                ];
            }
        }
        Self { table }
    }

    /// RGB triple for an 8-bit intensity.
    pub fn rgb(&self, intensity: u8) -> [u8; 3] {
        self.table[intensity as usize]
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t) as u8
}
