//! Color Model
//!
//! sRGB color value with parsing for CSS literals (`#rgb`, `#rrggbb`,
//! `rgb()`, `hsl()`), HSL/OKLCH conversion and the WCAG contrast ratio.

use std::fmt;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL triple: hue in degrees [0, 360), saturation and lightness in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// OKLCH triple: lightness [0, 1], chroma, hue in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color (`#fff`, `#ffffff`, `fff`, `ffffff`)
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = hex.chars().map(|c| {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    v * 16 + v
                });
                Some(Self::new(channels.next()?, channels.next()?, channels.next()?))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse `rgb(...)` / `rgba(...)` in comma or space syntax
    pub fn parse_rgb(value: &str) -> Option<Self> {
        let args = function_args(value, &["rgba", "rgb"])?;
        if args.len() < 3 {
            return None;
        }
        let channel = |arg: &str| -> Option<u8> {
            let v = if let Some(pct) = arg.strip_suffix('%') {
                pct.parse::<f64>().ok()? * 2.55
            } else {
                arg.parse::<f64>().ok()?
            };
            (0.0..=255.0).contains(&v).then(|| v.round() as u8)
        };
        Some(Self::new(
            channel(args[0])?,
            channel(args[1])?,
            channel(args[2])?,
        ))
    }

    /// Parse `hsl(...)` / `hsla(...)` in comma or space syntax
    pub fn parse_hsl(value: &str) -> Option<Self> {
        let args = function_args(value, &["hsla", "hsl"])?;
        if args.len() < 3 {
            return None;
        }
        let h = args[0].trim_end_matches("deg").parse::<f64>().ok()?;
        let pct = |arg: &str| -> Option<f64> {
            let v = arg.trim_end_matches('%').parse::<f64>().ok()? / 100.0;
            (0.0..=1.0).contains(&v).then_some(v)
        };
        let hsl = Hsl {
            h: h.rem_euclid(360.0),
            s: pct(args[1])?,
            l: pct(args[2])?,
        };
        Some(hsl.to_rgb())
    }

    /// Parse any supported CSS color literal
    pub fn parse_literal(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with('#') {
            Self::parse_hex(&lower)
        } else if lower.starts_with("rgb") {
            Self::parse_rgb(&lower)
        } else if lower.starts_with("hsl") {
            Self::parse_hsl(&lower)
        } else {
            None
        }
    }

    /// Canonical lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < f64::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: (h * 60.0).rem_euclid(360.0),
            s,
            l,
        }
    }

    /// WCAG relative luminance (0.0 = black, 1.0 = white)
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    pub fn to_oklch(&self) -> Oklch {
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);

        let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
        let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
        let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

        let lightness = 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_040_3 * s;
        let a = 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s;
        let bb = 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s;

        let chroma = (a * a + bb * bb).sqrt();
        let hue = if chroma < 1e-4 {
            0.0
        } else {
            bb.atan2(a).to_degrees().rem_euclid(360.0)
        };

        Oklch {
            l: lightness,
            c: chroma,
            h: hue,
        }
    }

    /// Euclidean distance in RGB space (0..~441)
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Hsl {
    pub fn to_rgb(&self) -> Rgb {
        if self.s == 0.0 {
            let v = (self.l * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let h = self.h / 360.0;
        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(
            to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, h)),
            to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

impl Oklch {
    /// CSS arbitrary-value form with underscores instead of spaces,
    /// e.g. `oklch(0.208_0.042_265.8)`
    pub fn to_arbitrary_value(&self) -> String {
        format!("oklch({:.3}_{:.3}_{:.1})", self.l, self.c, self.h)
    }
}

/// WCAG contrast ratio between two colors, in [1, 21]
pub fn contrast(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Convert sRGB channel to linear light
fn linearize(val: u8) -> f64 {
    let v = val as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Split `name(a, b, c)` / `name(a b c / d)` into its arguments
fn function_args<'a>(value: &'a str, names: &[&str]) -> Option<Vec<&'a str>> {
    let value = value.trim();
    let name = names.iter().find(|n| value.starts_with(*n))?;
    let inner = value[name.len()..]
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(
        inner
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect(),
    )
}
