//! Chart description schema.
//!
//! A chart is plain data: what kind it is, its labels, and its series.
//! Renderers (plotly figures, text summaries) consume these structs; the
//! builders never talk to a renderer directly.

use crate::aggregator::{GeoPoint, MapPoint};
use serde::{Deserialize, Serialize};

/// Kind of chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    /// Bars of several series side by side per x value
    GroupedBar,
    Line,
    /// Points on a geographic base map
    ScatterMap,
}

/// An x-axis value: either a year or a category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Year(i32),
    Label(String),
}

impl From<i32> for AxisValue {
    fn from(year: i32) -> Self {
        AxisValue::Year(year)
    }
}

impl From<String> for AxisValue {
    fn from(label: String) -> Self {
        AxisValue::Label(label)
    }
}

impl std::fmt::Display for AxisValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisValue::Year(y) => write!(f, "{}", y),
            AxisValue::Label(l) => f.write_str(l),
        }
    }
}

/// One named series of (x, y) points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<AxisValue>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn push(&mut self, x: impl Into<AxisValue>, y: f64) {
        self.x.push(x.into());
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// Geographic layer of a scatter map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    /// Mean of the plotted coordinates; `None` if nothing is plotted
    pub center: Option<GeoPoint>,
    pub zoom: u8,
    pub style: String,
    pub color_scale: String,
    /// Marker size for the largest value
    pub size_max: u32,
    pub points: Vec<MapPoint>,
}

/// A complete chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,

    /// Fixed y-axis window; autoscaled when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y_range: Option<[f64; 2]>,

    pub series: Vec<Series>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub map: Option<MapLayer>,
}

impl ChartSpec {
    /// Start a chart with no series and the legend shown
    pub fn new(kind: ChartKind, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            x_label: x_label.into(),
            y_label: y_label.into(),
            show_legend: true,
            y_range: None,
            series: Vec::new(),
            map: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn with_y_range(mut self, range: [f64; 2]) -> Self {
        self.y_range = Some(range);
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_map(mut self, map: MapLayer) -> Self {
        self.map = Some(map);
        self
    }

    /// True when nothing would be drawn
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
            && self.map.as_ref().map_or(true, |m| m.points.is_empty())
    }

    /// Number of plotted points across all series and the map layer
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum::<usize>()
            + self.map.as_ref().map_or(0, |m| m.points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_value_serializes_untagged() {
        let json = serde_json::to_string(&vec![AxisValue::Year(2010), AxisValue::Label("Marina".into())]).unwrap();
        assert_eq!(json, r#"[2010,"Marina"]"#);
    }

    #[test]
    fn test_empty_chart() {
        let chart = ChartSpec::new(ChartKind::Line, "Year", "Rent").with_series(Series::new("gross_rent"));
        assert!(chart.is_empty());
        assert_eq!(chart.point_count(), 0);
    }

    #[test]
    fn test_series_push() {
        let mut series = Series::new("gross_rent");
        series.push(2010, 1239.0);
        series.push(2011, 1530.0);

        let chart = ChartSpec::new(ChartKind::Line, "Year", "Rent").with_series(series);
        assert!(!chart.is_empty());
        assert_eq!(chart.point_count(), 2);
    }
}
