//! CSS color parsing and WCAG contrast math
//!
//! Supports the color notations the contrast check encounters in inline
//! styles: `#rgb`, `#rrggbb`, `rgb()`/`rgba()`, and common named colors.
//! Anything unrecognized parses to `None` and the element is skipped.

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parses a CSS color value
///
/// Recognized forms: `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
/// (alpha ignored), and a table of common named colors. Returns `None` for
/// anything else.
pub fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(args) = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
    {
        return parse_rgb_args(args.strip_suffix(')')?);
    }

    named_color(&value)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    // The arms below slice by byte index; non-ASCII input would split a
    // character and panic, so it is rejected as unparseable instead
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // #rgb expands each digit: #f0a -> #ff00aa
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Rgb> {
    let mut parts = args.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;
    // A fourth component (alpha) is allowed and ignored
    Some(Rgb::new(r, g, b))
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb::new(0, 0, 0),
        "white" => Rgb::new(255, 255, 255),
        "red" => Rgb::new(255, 0, 0),
        "green" => Rgb::new(0, 128, 0),
        "lime" => Rgb::new(0, 255, 0),
        "blue" => Rgb::new(0, 0, 255),
        "navy" => Rgb::new(0, 0, 128),
        "yellow" => Rgb::new(255, 255, 0),
        "orange" => Rgb::new(255, 165, 0),
        "purple" => Rgb::new(128, 0, 128),
        "fuchsia" | "magenta" => Rgb::new(255, 0, 255),
        "aqua" | "cyan" => Rgb::new(0, 255, 255),
        "teal" => Rgb::new(0, 128, 128),
        "olive" => Rgb::new(128, 128, 0),
        "maroon" => Rgb::new(128, 0, 0),
        "silver" => Rgb::new(192, 192, 192),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        "brown" => Rgb::new(165, 42, 42),
        "pink" => Rgb::new(255, 192, 203),
        _ => return None,
    };
    Some(rgb)
}

/// WCAG relative luminance of a color
///
/// Channels are linearized with the sRGB transfer curve, then weighted
/// 0.2126 / 0.7152 / 0.0722.
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = linearize(color.r);
    let g = linearize(color.g);
    let b = linearize(color.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two colors, in the range 1.0..=21.0
///
/// Symmetric in its arguments: `(L_max + 0.05) / (L_min + 0.05)`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
