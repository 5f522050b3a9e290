//! Dashboard layout settings.

use serde::{Deserialize, Serialize};

/// Cell of the dashboard grid occupied by a panel (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
    /// Number of columns spanned.
    pub colspan: usize,
}

impl GridPosition {
    /// A single-cell position.
    #[must_use]
    pub const fn cell(row: usize, col: usize) -> Self {
        Self { row, col, colspan: 1 }
    }

    /// A position spanning `colspan` columns from `col`.
    #[must_use]
    pub const fn span(row: usize, col: usize, colspan: usize) -> Self {
        Self { row, col, colspan }
    }
}

/// Font settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family.
    pub family: String,
    /// Size in points.
    pub size: u32,
    /// Text colour.
    pub color: String,
}

/// Figure margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Left margin.
    pub left: u32,
    /// Right margin.
    pub right: u32,
    /// Top margin.
    pub top: u32,
    /// Bottom margin.
    pub bottom: u32,
}

/// Size, grid and styling of the dashboard figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    /// Figure title.
    pub title: String,
    /// Title font.
    pub title_font: Font,
    /// Body font.
    pub font: Font,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Relative row heights, top to bottom.
    pub row_heights: Vec<f64>,
    /// Relative column widths, left to right.
    pub column_widths: Vec<f64>,
    /// Vertical gap between rows, as a fraction of the height.
    pub vertical_spacing: f64,
    /// Plot area background colour.
    pub plot_background: String,
    /// Figure background colour.
    pub paper_background: String,
    /// Figure margins.
    pub margins: Margins,
    /// Show chart legends.
    pub show_legend: bool,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            title: "Fixed Income Fund Analysis Dashboard".to_string(),
            title_font: Font {
                family: "Arial".to_string(),
                size: 22,
                color: "darkblue".to_string(),
            },
            font: Font {
                family: "Arial".to_string(),
                size: 14,
                color: "black".to_string(),
            },
            width: 1200,
            height: 1600,
            row_heights: vec![0.4, 0.3, 0.3],
            column_widths: vec![0.6, 0.4],
            vertical_spacing: 0.12,
            plot_background: "#f2f2f2".to_string(),
            paper_background: "#ffffff".to_string(),
            margins: Margins {
                left: 60,
                right: 60,
                top: 160,
                bottom: 80,
            },
            show_legend: false,
        }
    }
}

impl DashboardLayout {
    /// Creates the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the figure title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the figure size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.column_widths.len()
    }

    /// Returns true if `position` lies inside the grid.
    #[must_use]
    pub fn contains(&self, position: GridPosition) -> bool {
        position.row >= 1
            && position.col >= 1
            && position.colspan >= 1
            && position.row <= self.rows()
            && position.col + position.colspan - 1 <= self.cols()
    }
}
