use egui::{Pos2, Vec2};

/// Opaque, immutable star identifier.
///
/// Ids coming from the startup records are kept verbatim; ids minted by the board are
/// UUID v4 strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct StarId(String);

impl StarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random (v4) id.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StarId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The age label of a star.
///
/// The add-form hands over whatever the user typed, so an age may be raw text. Comparisons
/// always go through [`StarAge::value`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(untagged)
)]
pub enum StarAge {
    Number(f64),
    Text(String),
}

impl StarAge {
    /// Numeric value of the age.
    ///
    /// Text is read the way a browser's `Number(text)` reads it:
    /// - surrounding whitespace is ignored and empty text is `0`,
    /// - signed decimals with optional fraction and exponent,
    /// - `Infinity` with an optional sign (other spellings such as `inf` or `NaN` are `NaN`),
    /// - unsigned `0x`, `0o` and `0b` integers.
    ///
    /// Anything else is `NaN`.
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(text) => text_value(text),
        }
    }
}

fn text_value(text: &str) -> f64 {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return 0.0;
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|prefix| text.strip_prefix(*prefix)) {
            return radix_value(digits, radix);
        }
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // `str::parse::<f64>` also takes `inf`, `infinity` and `nan` in any case.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

fn radix_value(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|digit| acc * f64::from(radix) + f64::from(digit))
        })
        .unwrap_or(f64::NAN)
}

impl std::fmt::Display for StarAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for StarAge {
    fn from(age: f64) -> Self {
        Self::Number(age)
    }
}

impl From<i32> for StarAge {
    fn from(age: i32) -> Self {
        Self::Number(f64::from(age))
    }
}

impl From<&str> for StarAge {
    fn from(age: &str) -> Self {
        Self::Text(age.to_owned())
    }
}

impl From<String> for StarAge {
    fn from(age: String) -> Self {
        Self::Text(age)
    }
}

/// A positioned, aged point on the board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Star {
    id: StarId,
    age: StarAge,
    offset: Vec2,
    position: Option<Pos2>,
}

impl Star {
    pub fn new(id: StarId, age: StarAge) -> Self {
        Self::with_offset(id, age, Vec2::ZERO)
    }

    pub fn with_offset(id: StarId, age: StarAge, offset: Vec2) -> Self {
        Self {
            id,
            age,
            offset,
            position: None,
        }
    }

    pub fn id(&self) -> &StarId {
        &self.id
    }

    pub fn age(&self) -> &StarAge {
        &self.age
    }

    /// Position relative to the board center.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Absolute board coordinates (`left`, `top`), `None` until the board size is known.
    pub fn position(&self) -> Option<Pos2> {
        self.position
    }

    pub(crate) fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub(crate) fn set_position(&mut self, position: Option<Pos2>) {
        self.position = position;
    }
}
