//! Color conversions between hex strings and HSL, and hue-aware blending.
//!
//! Everything here fails soft: malformed input yields `None`, and
//! [`interpolate_color`] hands back its first argument instead of erroring.

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

/// Convert HSL back to a lowercase `#rrggbb` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(360.0) / 360.0;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Blend two hex colors in HSL space.
///
/// Saturation and lightness are interpolated linearly. Hue follows the
/// shortest arc around the wheel, so 350° → 10° passes through 0°, not 180°.
/// If either input fails to parse, `a` is returned unchanged.
pub fn interpolate_color(a: &str, b: &str, factor: f64) -> String {
    let (Some(rgb_a), Some(rgb_b)) = (hex_to_rgb(a), hex_to_rgb(b)) else {
        return a.to_string();
    };
    if rgb_a == rgb_b {
        return a.to_string();
    }

    let ha = rgb_to_hsl(rgb_a);
    let hb = rgb_to_hsl(rgb_b);

    let mut h1 = ha.h;
    let mut h2 = hb.h;
    let diff = h2 - h1;
    if diff > 180.0 {
        h1 += 360.0;
    } else if diff < -180.0 {
        h2 += 360.0;
    }

    let h = (h1 + (h2 - h1) * factor).rem_euclid(360.0);
    let s = ha.s + (hb.s - ha.s) * factor;
    let l = ha.l + (hb.l - ha.l) * factor;
    hsl_to_hex(h, s, l)
}

/// CSS color string for hue mode: full saturation, 70% lightness.
pub fn hue_color(hue: f64) -> String {
    format!("hsl({hue}, 100%, 70%)")
}

/// Attach an alpha channel to a color string.
///
/// `hsl(...)` becomes `hsla(..., a)` and `#rrggbb` becomes `rgba(r, g, b, a)`.
/// Anything else is passed through untouched.
pub fn with_opacity(color: &str, alpha: f64) -> String {
    if let Some(body) = color
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return format!("hsla({body}, {alpha})");
    }
    if color.starts_with('#') {
        if let Some(Rgb { r, g, b }) = hex_to_rgb(color) {
            return format!("rgba({r}, {g}, {b}, {alpha})");
        }
    }
    color.to_string()
}
