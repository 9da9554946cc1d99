/// Splits `0xRRGGBB` into sRGB channels in `[0, 1]`.
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

fn srgb_channel_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}

/// Hex color in linear space, ready for shading on an sRGB surface.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_srgb(hex).map(srgb_channel_to_linear)
}

pub fn hex_to_wgpu(hex: u32) -> wgpu::Color {
    let [r, g, b] = hex_to_linear(hex);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_channels() {
        assert_eq!(hex_to_srgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_to_srgb(0x000000), [0.0, 0.0, 0.0]);
        let [r, g, b] = hex_to_srgb(0x0a0a0a);
        assert!((r - 10.0 / 255.0).abs() < 1e-6 && r == g && g == b);
    }

    #[test]
    fn linearizes_theme_colors() {
        let [light, ..] = hex_to_linear(0xf0f0f0);
        assert!((light - 0.8714).abs() < 1e-3);

        let [dark, ..] = hex_to_linear(0x0a0a0a);
        assert!((dark - 0.0030).abs() < 1e-4);

        assert!(hex_to_linear(0xffffff).iter().all(|c| (c - 1.0).abs() < 1e-5));
    }
}
