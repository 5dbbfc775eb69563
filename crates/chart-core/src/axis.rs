// File: crates/chart-core/src/axis.rs
// Summary: Axis model: category axis over labels, numeric axis over values.

use crate::scale::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub enum AxisKind {
    /// Discrete labels placed on a point scale, in order.
    Category(Vec<String>),
    /// Continuous values; `min`/`max` hold the current domain.
    Number,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Field of the sample this axis reads (informational; shown nowhere).
    pub data_key: String,
    pub kind: AxisKind,
    pub min: f64,
    pub max: f64,
    /// Target number of ticks for numeric axes.
    pub tick_count: usize,
}

/// One tick: the value it marks and the text drawn next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Axis {
    pub fn category<S: Into<String>>(data_key: impl Into<String>, labels: impl IntoIterator<Item = S>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let max = labels.len().saturating_sub(1) as f64;
        Self { data_key: data_key.into(), kind: AxisKind::Category(labels), min: 0.0, max, tick_count: 0 }
    }

    pub fn number(data_key: impl Into<String>) -> Self {
        Self { data_key: data_key.into(), kind: AxisKind::Number, min: 0.0, max: 1.0, tick_count: 5 }
    }

    /// Category labels, empty for numeric axes.
    pub fn labels(&self) -> &[String] {
        match &self.kind {
            AxisKind::Category(labels) => labels,
            AxisKind::Number => &[],
        }
    }

    /// Numeric domain `[min(0, lo), auto]` widened to nice tick boundaries.
    pub fn fit_from_zero(&mut self, lo: f64, hi: f64) {
        let ticks = nice_ticks(lo.min(0.0), hi, self.tick_count);
        if let (Some(&first), Some(&last)) = (ticks.first(), ticks.last()) {
            self.min = first;
            self.max = last;
        }
    }

    pub fn ticks(&self) -> Vec<Tick> {
        match &self.kind {
            AxisKind::Category(labels) => labels
                .iter()
                .enumerate()
                .map(|(i, l)| Tick { value: i as f64, label: l.clone() })
                .collect(),
            AxisKind::Number => nice_ticks(self.min, self.max, self.tick_count)
                .into_iter()
                .map(|v| Tick { value: v, label: format_value(v) })
                .collect(),
        }
    }
}

/// Integers print without a fraction; everything else keeps up to two decimals.
pub fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_domain_starts_at_zero() {
        let mut y = Axis::number("count");
        y.fit_from_zero(7.0, 24.0);
        assert_eq!((y.min, y.max), (0.0, 24.0));
        let labels: Vec<String> = y.ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["0", "6", "12", "18", "24"]);
    }

    #[test]
    fn category_ticks_follow_label_order() {
        let x = Axis::category("day", ["a", "b", "c"]);
        let ticks = x.ticks();
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[2], Tick { value: 2.0, label: "c".into() });
    }

    #[test]
    fn formats_values() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-3.0), "-3");
    }
}
