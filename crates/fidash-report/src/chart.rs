//! Chart primitives.
//!
//! Charts carry labels, values and styling only; a charting front end
//! draws them.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fidash_holdings::{Exposure, HoldingWeight};

/// Slice colours for pie charts, cycled when there are more slices.
pub const PIE_COLORS: [&str; 5] = ["#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A"];

/// Bar colours, one per bar, cycled past ten bars.
pub const BAR_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Number of leading pie slices pulled out from the centre.
pub const PULLED_SLICES: usize = 3;

/// Offset applied to pulled slices, as a fraction of the radius.
pub const SLICE_PULL: f64 = 0.1;

/// Bar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Categories on the y axis, values on the x axis.
    Horizontal,
    /// Categories on the x axis, values on the y axis.
    Vertical,
}

/// Axis titles of a bar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisTitles {
    /// Horizontal axis title.
    pub x: String,
    /// Vertical axis title.
    pub y: String,
}

/// A pie chart of category weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    /// Chart name.
    pub name: String,
    /// Slice labels.
    pub labels: Vec<String>,
    /// Slice values in percentage units.
    pub values: Vec<f64>,
    /// Slice colours.
    pub colors: Vec<String>,
    /// Radial offset per slice.
    pub pull: Vec<f64>,
}

impl PieChart {
    /// Builds a pie chart from an exposure view, keeping its order.
    #[must_use]
    pub fn from_exposures(name: impl Into<String>, exposures: &[Exposure]) -> Self {
        let len = exposures.len();
        Self {
            name: name.into(),
            labels: exposures.iter().map(|e| e.label.clone()).collect(),
            values: exposures.iter().map(|e| to_f64(e.weight)).collect(),
            colors: palette(&PIE_COLORS, len),
            pull: (0..len)
                .map(|i| if i < PULLED_SLICES { SLICE_PULL } else { 0.0 })
                .collect(),
        }
    }

    /// Number of slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the chart has no slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A bar chart of labelled weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    /// Chart name.
    pub name: String,
    /// Bar direction.
    pub orientation: Orientation,
    /// Category labels, one per bar.
    pub categories: Vec<String>,
    /// Bar values in percentage units.
    pub values: Vec<f64>,
    /// Value text drawn next to each bar.
    pub text: Vec<String>,
    /// Bar colours.
    pub colors: Vec<String>,
    /// Axis titles.
    pub axes: AxisTitles,
}

impl BarChart {
    /// Builds a bar chart from labelled weights, keeping their order.
    #[must_use]
    pub fn new<'a>(
        name: impl Into<String>,
        orientation: Orientation,
        bars: impl IntoIterator<Item = (&'a str, Decimal)>,
    ) -> Self {
        let (categories, weights): (Vec<String>, Vec<Decimal>) = bars
            .into_iter()
            .map(|(label, weight)| (label.to_string(), weight))
            .unzip();
        let values: Vec<f64> = weights.into_iter().map(to_f64).collect();

        Self {
            name: name.into(),
            orientation,
            text: values.iter().map(|v| format_percent(*v)).collect(),
            colors: palette(&BAR_COLORS, categories.len()),
            categories,
            values,
            axes: AxisTitles::default(),
        }
    }

    /// Horizontal bars from an exposure view.
    #[must_use]
    pub fn from_exposures(name: impl Into<String>, exposures: &[Exposure]) -> Self {
        Self::new(
            name,
            Orientation::Horizontal,
            exposures.iter().map(|e| (e.label.as_str(), e.weight)),
        )
    }

    /// Vertical bars from a holdings view.
    #[must_use]
    pub fn from_holdings(name: impl Into<String>, holdings: &[HoldingWeight]) -> Self {
        Self::new(
            name,
            Orientation::Vertical,
            holdings.iter().map(|h| (h.security.as_str(), h.weight)),
        )
    }

    /// Sets the axis titles.
    #[must_use]
    pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.axes = AxisTitles {
            x: x.into(),
            y: y.into(),
        };
        self
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the chart has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A chart drawn in one dashboard panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Chart {
    /// Pie chart.
    Pie(PieChart),
    /// Bar chart.
    Bar(BarChart),
}

impl Chart {
    /// Returns true if the chart has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Pie(pie) => pie.is_empty(),
            Self::Bar(bar) => bar.is_empty(),
        }
    }
}

/// Formats a weight as bar text, e.g. `"2.38%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn palette(colors: &[&str], len: usize) -> Vec<String> {
    colors
        .iter()
        .cycle()
        .take(len)
        .map(|c| (*c).to_string())
        .collect()
}

fn to_f64(weight: Decimal) -> f64 {
    weight.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn exposures(n: usize) -> Vec<Exposure> {
        (0..n)
            .map(|i| Exposure::new(format!("C{i}"), Decimal::from(n - i)))
            .collect()
    }

    #[test]
    fn test_pie_pulls_top_three() {
        let pie = PieChart::from_exposures("Country Exposure", &exposures(5));
        assert_eq!(pie.pull, vec![0.1, 0.1, 0.1, 0.0, 0.0]);
        assert_eq!(pie.labels[0], "C0");
        assert_eq!(pie.values[0], 5.0);
    }

    #[test]
    fn test_pie_colors_cycle() {
        let pie = PieChart::from_exposures("Rating Exposure", &exposures(7));
        assert_eq!(pie.colors.len(), 7);
        assert_eq!(pie.colors[5], PIE_COLORS[0]);
        assert_eq!(pie.colors[6], PIE_COLORS[1]);
    }

    #[test]
    fn test_pie_fewer_slices_than_pulled() {
        let pie = PieChart::from_exposures("Rating Exposure", &exposures(2));
        assert_eq!(pie.pull, vec![0.1, 0.1]);
    }

    #[test]
    fn test_bar_from_exposures() {
        let data = vec![
            Exposure::new("Z", dec!(0.5)),
            Exposure::new("X", dec!(2.376)),
        ];
        let bar = BarChart::from_exposures("Top 10 Issuers", &data);

        assert_eq!(bar.orientation, Orientation::Horizontal);
        assert_eq!(bar.categories, vec!["Z", "X"]);
        assert_eq!(bar.values, vec![0.5, 2.376]);
        assert_eq!(bar.text, vec!["0.50%", "2.38%"]);
        assert_eq!(bar.colors, vec![BAR_COLORS[0], BAR_COLORS[1]]);
    }

    #[test]
    fn test_bar_from_holdings() {
        let data = vec![HoldingWeight::new("A", dec!(5))];
        let bar = BarChart::from_holdings("Top 10 Holdings", &data).with_axes("Security", "Weight (%)");

        assert_eq!(bar.orientation, Orientation::Vertical);
        assert_eq!(bar.axes.x, "Security");
        assert_eq!(bar.axes.y, "Weight (%)");
        assert_eq!(bar.text, vec!["5.00%"]);
    }

    #[test]
    fn test_empty_charts() {
        let pie = PieChart::from_exposures("Country Exposure", &[]);
        let bar = BarChart::from_holdings("Top 10 Holdings", &[]);

        assert!(pie.is_empty());
        assert!(pie.pull.is_empty());
        assert!(bar.is_empty());
        assert!(Chart::Pie(pie).is_empty());
        assert!(Chart::Bar(bar).is_empty());
    }

    #[test]
    fn test_chart_serde_tag() {
        let chart = Chart::Bar(BarChart::from_holdings("H", &[]));
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["orientation"], "vertical");
    }
}
