// File: crates/chart-core/src/series.rs
// Summary: Line series model: one value per category, drawn with an optional curve and dots.

use skia_safe as skia;

use crate::curve::CurveType;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Display name, used as the tooltip row label.
    pub name: String,
    pub values: Vec<f64>,
    pub curve: CurveType,
    pub stroke_width: f32,
    /// Stroke colour; the theme line colour when `None`.
    pub color: Option<skia::Color>,
    /// Draw a dot on every point.
    pub dots: bool,
}

impl Series {
    pub fn line(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
            curve: CurveType::Linear,
            stroke_width: 1.0,
            color: None,
            dots: true,
        }
    }

    pub fn with_curve(mut self, curve: CurveType) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_stroke(mut self, color: skia::Color, width: f32) -> Self {
        self.color = Some(color);
        self.stroke_width = width.max(0.0);
        self
    }

    /// (min, max) over the values, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Parse `#rgb` / `#rrggbb` into an opaque colour.
pub fn parse_hex_color(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let expand = |c: u8| c * 17;
    let digit = |c: char| c.to_digit(16).map(|d| d as u8);
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(digit);
            let (r, g, b) = (it.next()??, it.next()??, it.next()??);
            Some(skia::Color::from_rgb(expand(r), expand(g), expand(b)))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(parse_hex_color("#8884d8"), Some(skia::Color::from_rgb(0x88, 0x84, 0xd8)));
        assert_eq!(parse_hex_color("#ccc"), Some(skia::Color::from_rgb(0xcc, 0xcc, 0xcc)));
        assert_eq!(parse_hex_color("8884d8"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn value_range_ignores_nan() {
        let s = Series::line("leads", [3.0, f64::NAN, 9.0, 1.0]);
        assert_eq!(s.value_range(), Some((1.0, 9.0)));
        assert_eq!(Series::line("empty", Vec::new()).value_range(), None);
    }
}
