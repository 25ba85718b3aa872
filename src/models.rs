use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single color component as it is written into a request.
///
/// Values are not range checked. A component that could not be parsed is
/// carried as "not a number" and rendered as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel(Option<i64>);

impl Channel {
    pub const NAN: Channel = Channel(None);

    pub fn is_nan(self) -> bool {
        self.0.is_none()
    }
}

impl From<u8> for Channel {
    fn from(value: u8) -> Self {
        Channel(Some(value.into()))
    }
}

impl From<i64> for Channel {
    fn from(value: i64) -> Self {
        Channel(Some(value))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draws every component independently and uniformly from `0..=255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0..=255),
            g: rng.gen_range(0..=255),
            b: rng.gen_range(0..=255),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color value, e.g. `rgb(255, 128, 0)`.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Unvalidated color triple forwarded to `/set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawRgb {
    pub r: Channel,
    pub g: Channel,
    pub b: Channel,
}

impl RawRgb {
    pub fn new(r: impl Into<Channel>, g: impl Into<Channel>, b: impl Into<Channel>) -> Self {
        Self {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

impl From<Rgb> for RawRgb {
    fn from(color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

/// Splits a color picker value such as `#a1b2c3` into its three byte pairs.
///
/// Only the first `#` is removed. Each pair is parsed leniently: leading
/// whitespace, a sign and a `0x` prefix are accepted, then the longest run
/// of hex digits is used. Pairs that are missing or hold no digits come out
/// as [`Channel::NAN`]; nothing here fails.
pub fn parse_hex_color(hex: &str) -> RawRgb {
    // Offsets count UTF-16 code units, as a browser's `substring` does.
    let units: Vec<u16> = hex.replacen('#', "", 1).encode_utf16().collect();
    let pair = |start: usize| -> String {
        let start = start.min(units.len());
        let end = (start + 2).min(units.len());
        String::from_utf16_lossy(&units[start..end])
    };

    RawRgb {
        r: parse_hex_prefix(&pair(0)),
        g: parse_hex_prefix(&pair(2)),
        b: parse_hex_prefix(&pair(4)),
    }
}

fn parse_hex_prefix(text: &str) -> Channel {
    let mut rest = text.trim_start();

    let negative = match rest.chars().next() {
        Some('-') => {
            rest = &rest[1..];
            true
        }
        Some('+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        rest = stripped;
    }

    let mut value: Option<i64> = None;
    for digit in rest.chars().map_while(|c| c.to_digit(16)) {
        let acc = value.unwrap_or(0);
        value = Some(acc.saturating_mul(16).saturating_add(i64::from(digit)));
    }

    Channel(value.map(|v| if negative { -v } else { v }))
}

/// Brightness as reported by the slider. The device defines its range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brightness(pub f64);

impl From<f64> for Brightness {
    fn from(value: f64) -> Self {
        Brightness(value)
    }
}

impl From<u8> for Brightness {
    fn from(value: u8) -> Self {
        Brightness(value.into())
    }
}

impl From<i32> for Brightness {
    fn from(value: i32) -> Self {
        Brightness(value.into())
    }
}

/// Renders the value the way a JavaScript number prints.
impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("NaN");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if v == 0.0 {
            // Covers -0 too.
            return f.write_str("0");
        }

        let magnitude = v.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{v}");
        }

        // Exponent form always carries a sign: 1e+21, 1.5e-7.
        let text = format!("{v:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Static,
    Rainbow,
    Ambilight,
    Off,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Static => "static",
            Mode::Rainbow => "rainbow",
            Mode::Ambilight => "ambilight",
            Mode::Off => "off",
            Mode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Mode::Static),
            "rainbow" => Ok(Mode::Rainbow),
            "ambilight" => Ok(Mode::Ambilight),
            "off" => Ok(Mode::Off),
            other => Err(format!(
                "unknown mode '{other}', expected one of: static, rainbow, ambilight, off"
            )),
        }
    }
}

/// Snapshot returned by the status endpoint. Only lives for one poll cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceStatus {
    #[serde(default)]
    pub brightness: Option<Brightness>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, rename = "colorHex")]
    pub color_hex: Option<String>,
}

/// Persistent device settings served by `/config`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub num_leds: Option<u16>,
    #[serde(default)]
    pub brightness: Option<u8>,
    #[serde(default)]
    pub max_milliamps: Option<u16>,
    #[serde(default)]
    pub baud_rate: Option<u32>,
    #[serde(default)]
    pub wifi_ssid: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
}
