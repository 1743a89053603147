//! Plotly chart types for calendar heatmaps
//!
//! Shared Plotly types used by the report formatters for generating
//! interactive month heatmaps compatible with Plotly.js.

use serde::Serialize;

/// Colour for highlight rectangles
pub const HIGHLIGHT_COLOUR: &str = "red";

/// Colour for gap-filled days that carry no measurement
pub const MISSING_DAY_COLOUR: &str = "lightgray";

/// Green-to-yellow scale for measured days
pub const VALUE_COLOURSCALE: &str = "YlGn";

// ============================================================================
// Font and Styling Types
// ============================================================================

/// Plotly font configuration for titles, labels, and annotations
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Plotly annotation for adding text boxes and labels to charts
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAnnotation {
    pub text: String,
    /// Reference for x position: "paper" (0-1 fraction) or "x" (data coords)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    /// Reference for y position: "paper" (0-1 fraction) or "y" (data coords)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showarrow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bordercolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borderwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borderpad: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PlotlyFont>,
}

impl PlotlyAnnotation {
    /// Create a statistics box annotation (common pattern for summary tables)
    ///
    /// Positioned in paper coordinates with monospace font and subtle border.
    pub fn stats_box(text: &str, x: f64, y: f64) -> Self {
        Self {
            text: text.to_string(),
            xref: Some("paper".to_string()),
            yref: Some("paper".to_string()),
            x: Some(x),
            y: Some(y),
            xanchor: Some("left".to_string()),
            yanchor: Some("bottom".to_string()),
            showarrow: Some(false),
            bgcolor: Some("rgba(255, 255, 255, 0.8)".to_string()),
            bordercolor: Some("gray".to_string()),
            borderwidth: Some(1),
            borderpad: Some(4),
            font: Some(PlotlyFont {
                family: Some("monospace".to_string()),
                size: Some(10),
            }),
        }
    }

    /// Day-of-month number drawn at the centre of a grid cell (data coords)
    pub fn cell_label(text: &str, col: usize, row: usize) -> Self {
        Self {
            text: text.to_string(),
            xref: Some("x".to_string()),
            yref: Some("y".to_string()),
            x: Some(col as f64),
            y: Some(row as f64),
            xanchor: None,
            yanchor: None,
            showarrow: Some(false),
            bgcolor: None,
            bordercolor: None,
            borderwidth: None,
            borderpad: None,
            font: Some(PlotlyFont {
                family: None,
                size: Some(12),
            }),
        }
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Complete Plotly chart data structure
///
/// Standard format expected by Plotly.js: `{data: [...], layout: {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyChart {
    pub data: Vec<PlotlyHeatmapTrace>,
    pub layout: PlotlyLayout,
}

/// Plotly heatmap trace
///
/// `z` is row-major, one inner vector per week row; `null` cells are left
/// transparent.
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyHeatmapTrace {
    pub z: Vec<Vec<Option<f64>>>,
    pub name: String,
    #[serde(rename = "type")]
    pub trace_type: String,
    /// Named scale ("YlGn") or explicit stops
    pub colorscale: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zmax: Option<f64>,
    pub showscale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<PlotlyColorBar>,
    /// Gap between cells in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xgap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ygap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
}

impl PlotlyHeatmapTrace {
    /// Value heatmap sharing a fixed `[zmin, zmax]` range across months
    pub fn values(z: Vec<Vec<Option<f64>>>, name: &str, zmax: Option<f64>) -> Self {
        Self {
            z,
            name: name.to_string(),
            trace_type: "heatmap".to_string(),
            colorscale: serde_json::Value::String(VALUE_COLOURSCALE.to_string()),
            zmin: Some(0.0),
            zmax,
            showscale: true,
            colorbar: Some(PlotlyColorBar { len: 0.8 }),
            xgap: Some(1),
            ygap: Some(1),
            hovertemplate: Some(format!("%{{z}} {}<extra></extra>", name)),
            hoverinfo: None,
        }
    }

    /// Flat single-colour layer for cells flagged with `Some(1.0)`
    pub fn flat(z: Vec<Vec<Option<f64>>>, name: &str, colour: &str) -> Self {
        Self {
            z,
            name: name.to_string(),
            trace_type: "heatmap".to_string(),
            colorscale: serde_json::json!([[0.0, colour], [1.0, colour]]),
            zmin: Some(0.0),
            zmax: Some(1.0),
            showscale: false,
            colorbar: None,
            xgap: Some(1),
            ygap: Some(1),
            hovertemplate: None,
            hoverinfo: Some("skip".to_string()),
        }
    }
}

/// Plotly colour bar configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyColorBar {
    /// Fraction of the plot height
    pub len: f64,
}

/// Plotly line configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLine {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Plotly layout shape (used for highlight rectangles)
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyShape {
    #[serde(rename = "type")]
    pub shape_type: String,
    pub xref: String,
    pub yref: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: PlotlyLine,
    pub fillcolor: String,
}

impl PlotlyShape {
    /// Unfilled rectangle outlining the cell at (`row`, `col`)
    pub fn cell_outline(row: usize, col: usize, colour: &str) -> Self {
        Self {
            shape_type: "rect".to_string(),
            xref: "x".to_string(),
            yref: "y".to_string(),
            x0: col as f64 - 0.5,
            y0: row as f64 - 0.5,
            x1: col as f64 + 0.5,
            y1: row as f64 + 0.5,
            line: PlotlyLine {
                color: colour.to_string(),
                width: Some(1.5),
            },
            fillcolor: "rgba(0, 0, 0, 0)".to_string(),
        }
    }
}

/// Plotly hover label configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyHoverLabel {
    /// -1 means show full name without truncation
    pub namelength: i32,
}

/// Plotly layout configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLayout {
    pub title: PlotlyTitle,
    pub xaxis: PlotlyAxis,
    pub yaxis: PlotlyAxis,
    pub hoverlabel: PlotlyHoverLabel,
    /// Highlight rectangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<PlotlyShape>>,
    /// Annotations (day numbers, distance table)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<PlotlyAnnotation>>,
}

/// Plotly title configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTitle {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PlotlyFont>,
}

/// Plotly axis configuration with explicit categorical ticks
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAxis {
    pub tickvals: Vec<f64>,
    pub ticktext: Vec<String>,
    /// "top" puts weekday labels above the grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// "reversed" so week row 0 is drawn at the top
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    /// Keeps cells square when set to the other axis id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<String>,
    pub showgrid: bool,
    pub zeroline: bool,
}

impl PlotlyAxis {
    /// Weekday axis along the top of the grid
    pub fn weekdays(labels: &[&str]) -> Self {
        Self {
            tickvals: (0..labels.len()).map(|i| i as f64).collect(),
            ticktext: labels.iter().map(|l| l.to_string()).collect(),
            side: Some("top".to_string()),
            autorange: None,
            tickangle: None,
            scaleanchor: None,
            showgrid: false,
            zeroline: false,
        }
    }

    /// Week-row axis carrying month labels at their anchor positions
    pub fn week_rows(tickvals: Vec<f64>, ticktext: Vec<String>) -> Self {
        Self {
            tickvals,
            ticktext,
            side: None,
            autorange: Some("reversed".to_string()),
            tickangle: Some(-90),
            scaleanchor: Some("x".to_string()),
            showgrid: false,
            zeroline: false,
        }
    }
}

impl PlotlyLayout {
    /// Month heatmap layout with weekday columns and reversed week rows
    pub fn calendar(title: &str, xaxis: PlotlyAxis, yaxis: PlotlyAxis) -> Self {
        Self {
            title: PlotlyTitle {
                text: title.to_string(),
                font: None,
            },
            xaxis,
            yaxis,
            hoverlabel: PlotlyHoverLabel { namelength: -1 },
            shapes: None,
            annotations: None,
        }
    }

    /// Add highlight shapes to the layout
    pub fn with_shapes(mut self, shapes: Vec<PlotlyShape>) -> Self {
        if !shapes.is_empty() {
            self.shapes = Some(shapes);
        }
        self
    }

    /// Add annotations to the layout
    pub fn with_annotations(mut self, annotations: Vec<PlotlyAnnotation>) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Set title font size
    pub fn with_title_font_size(mut self, size: u32) -> Self {
        self.title.font = Some(PlotlyFont {
            family: None,
            size: Some(size),
        });
        self
    }
}
