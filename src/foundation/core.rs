use crate::foundation::error::{MotifError, MotifResult};

/// 2D vector used for layer offsets and orb anchors.
pub use kurbo::Vec2;

/// Zero-based frame number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Convert a signed frame number, rejecting negative values with a range error.
    pub fn try_from_i64(frame: i64) -> MotifResult<Self> {
        u64::try_from(frame)
            .map(Self)
            .map_err(|_| MotifError::range(format!("frame {frame} is negative")))
    }
}

/// Half-open frame interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame (inclusive).
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Fails when `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> MotifResult<Self> {
        if start.0 > end.0 {
            return Err(MotifError::config("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when no frame is covered.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies in `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Rational frame rate `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (> 0).
    pub num: u32,
    /// Denominator (> 0).
    pub den: u32,
}

impl Fps {
    /// Fails when either part is zero.
    pub fn new(num: u32, den: u32) -> MotifResult<Self> {
        if den == 0 {
            return Err(MotifError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(MotifError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Integer frame rate (`den == 1`).
    pub fn integer(num: u32) -> MotifResult<Self> {
        Self::new(num, 1)
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Length of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Seconds elapsed after `frames` frames. Fractional and negative frame counts are allowed.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }

    /// Inverse of [`Self::frames_to_secs`].
    pub fn secs_to_frames(self, secs: f64) -> f64 {
        secs * self.as_f64()
    }
}

/// Output resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Straight-alpha RGBA8 color.
///
/// Serialized as a `#RRGGBBAA` hex string; deserialized from `#RRGGBB`, `#RRGGBBAA` or a
/// `[r, g, b]` / `[r, g, b, a]` byte array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced (the `#A855F7` + `"40"` idiom of hex alpha suffixes).
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(s: &str) -> MotifResult<Self> {
        parse_hex(s).map_err(MotifError::config)
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize as _;

        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
