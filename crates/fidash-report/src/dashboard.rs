//! Composite dashboard built from the holdings views.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fidash_holdings::HoldingsViews;

use crate::chart::{BarChart, Chart, PieChart};
use crate::layout::{DashboardLayout, GridPosition};

/// Panel titles, in drawing order.
pub const COUNTRY_EXPOSURE_TITLE: &str = "Country Exposure";
/// Rating exposure panel title.
pub const RATING_EXPOSURE_TITLE: &str = "Rating Exposure";
/// Top issuers panel title.
pub const TOP_ISSUERS_TITLE: &str = "Top 10 Issuers";
/// Top holdings panel title.
pub const TOP_HOLDINGS_TITLE: &str = "Top 10 Holdings by Weight";

/// Axis title for weight values.
pub const WEIGHT_AXIS: &str = "Weight (%)";

/// One titled chart placed on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Panel title.
    pub title: String,
    /// Grid cell.
    pub position: GridPosition,
    /// Chart drawn in the panel.
    pub chart: Chart,
}

/// The full dashboard: layout plus panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Figure layout.
    pub layout: DashboardLayout,
    /// Panels in drawing order.
    pub panels: Vec<Panel>,
}

impl Dashboard {
    /// Finds a panel by title.
    #[must_use]
    pub fn panel(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }

    /// Returns true if no panel has anything to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.iter().all(|p| p.chart.is_empty())
    }
}

/// Lays out the four views as a dashboard.
///
/// Row 1 holds the country and rating pies side by side. Row 2 holds the
/// top issuers as horizontal bars and row 3 the top holdings as vertical
/// bars, each spanning the full width. Views are drawn in the order given;
/// empty views produce empty panels.
#[must_use]
pub fn build_dashboard(views: &HoldingsViews, layout: &DashboardLayout) -> Dashboard {
    let panels = vec![
        Panel {
            title: COUNTRY_EXPOSURE_TITLE.to_string(),
            position: GridPosition::cell(1, 1),
            chart: Chart::Pie(PieChart::from_exposures(
                COUNTRY_EXPOSURE_TITLE,
                &views.country_exposure,
            )),
        },
        Panel {
            title: RATING_EXPOSURE_TITLE.to_string(),
            position: GridPosition::cell(1, 2),
            chart: Chart::Pie(PieChart::from_exposures(
                RATING_EXPOSURE_TITLE,
                &views.rating_exposure,
            )),
        },
        Panel {
            title: TOP_ISSUERS_TITLE.to_string(),
            position: GridPosition::span(2, 1, 2),
            chart: Chart::Bar(
                BarChart::from_exposures(TOP_ISSUERS_TITLE, &views.top_issuers)
                    .with_axes(WEIGHT_AXIS, "Issuer"),
            ),
        },
        Panel {
            title: TOP_HOLDINGS_TITLE.to_string(),
            position: GridPosition::span(3, 1, 2),
            chart: Chart::Bar(
                BarChart::from_holdings(TOP_HOLDINGS_TITLE, &views.top_holdings)
                    .with_axes("Security", WEIGHT_AXIS),
            ),
        },
    ];

    debug!(
        panels = panels.len(),
        empty = panels.iter().filter(|p| p.chart.is_empty()).count(),
        "Built dashboard"
    );

    Dashboard {
        layout: layout.clone(),
        panels,
    }
}
