//! Conversion of chart descriptions into plotly.js figures.
//!
//! Output is the `{"data": [...], "layout": {...}}` object that
//! `Plotly.newPlot` accepts.

use super::schema::{ChartKind, ChartSpec, MapLayer, Series};
use crate::utils::error::ChartError;
use serde_json::{json, Map, Value};

// cmocean "thermal", as shipped with plotly's Python colors module
const THERMAL: &[&str] = &[
    "rgb(3, 35, 51)",
    "rgb(13, 48, 100)",
    "rgb(53, 50, 155)",
    "rgb(93, 62, 153)",
    "rgb(126, 77, 143)",
    "rgb(158, 89, 135)",
    "rgb(193, 100, 121)",
    "rgb(225, 113, 97)",
    "rgb(246, 139, 69)",
    "rgb(251, 173, 60)",
    "rgb(246, 211, 70)",
    "rgb(231, 250, 90)",
];

/// Convert a chart description into a plotly figure
///
/// **Public** - used by the HTML writer
///
/// # Errors
/// * `ChartError::Serialization` - a series could not be encoded
pub fn to_plotly_figure(chart: &ChartSpec) -> Result<Value, ChartError> {
    let data = match (chart.kind, chart.map.as_ref()) {
        (ChartKind::ScatterMap, Some(map)) => vec![map_trace(map)],
        (ChartKind::ScatterMap, None) => Vec::new(),
        (kind, _) => chart
            .series
            .iter()
            .map(|s| series_trace(kind, s))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(json!({
        "data": data,
        "layout": layout(chart),
    }))
}

/// Serialize a figure straight to a JSON string
pub fn to_plotly_json(chart: &ChartSpec) -> Result<String, ChartError> {
    Ok(serde_json::to_string(&to_plotly_figure(chart)?)?)
}

/// Resolve a color scale name into plotly stops
///
/// **Public** - plotly.js has no "thermal" built in, so it is expanded
/// into explicit stops; other names pass through unchanged
pub fn color_scale(name: &str) -> Value {
    if name != "thermal" {
        return Value::String(name.to_string());
    }
    let last = (THERMAL.len() - 1) as f64;
    Value::Array(
        THERMAL
            .iter()
            .enumerate()
            .map(|(i, c)| json!([i as f64 / last, c]))
            .collect(),
    )
}

/// **Private** - one bar or line trace
fn series_trace(kind: ChartKind, series: &Series) -> Result<Value, ChartError> {
    let mut trace = Map::new();
    trace.insert("name".into(), Value::String(series.name.clone()));
    trace.insert("x".into(), serde_json::to_value(&series.x)?);
    trace.insert("y".into(), serde_json::to_value(&series.y)?);

    match kind {
        ChartKind::Line => {
            trace.insert("type".into(), json!("scatter"));
            trace.insert("mode".into(), json!("lines"));
        }
        _ => {
            trace.insert("type".into(), json!("bar"));
        }
    }

    Ok(Value::Object(trace))
}

/// **Private** - scattermapbox trace, marker area proportional to rent
fn map_trace(map: &MapLayer) -> Value {
    let rents: Vec<f64> = map.points.iter().map(|p| p.average_rent).collect();
    let max = rents.iter().cloned().fold(0.0_f64, f64::max);
    let size_max = f64::from(map.size_max);
    let sizeref = if max > 0.0 { 2.0 * max / (size_max * size_max) } else { 1.0 };

    json!({
        "type": "scattermapbox",
        "mode": "markers",
        "lat": map.points.iter().map(|p| p.lat).collect::<Vec<_>>(),
        "lon": map.points.iter().map(|p| p.lon).collect::<Vec<_>>(),
        "text": map.points.iter().map(|p| p.neighborhood.as_str()).collect::<Vec<_>>(),
        "hovertemplate": "<b>%{text}</b><br>Average Rent=%{marker.color}<extra></extra>",
        "marker": {
            "size": rents,
            "sizemode": "area",
            "sizeref": sizeref,
            "sizemin": 1,
            "color": rents,
            "colorscale": color_scale(&map.color_scale),
            "showscale": true,
            "colorbar": { "title": { "text": "Average Rent" } },
        },
    })
}

fn layout(chart: &ChartSpec) -> Value {
    let mut layout = Map::new();
    layout.insert("showlegend".into(), Value::Bool(chart.show_legend));

    if let Some(title) = &chart.title {
        layout.insert("title".into(), json!({ "text": title }));
    }

    if let Some(map) = &chart.map {
        let mut mapbox = Map::new();
        mapbox.insert("style".into(), json!(map.style));
        mapbox.insert("zoom".into(), json!(map.zoom));
        if let Some(center) = map.center {
            mapbox.insert("center".into(), json!({ "lat": center.lat, "lon": center.lon }));
        }
        layout.insert("mapbox".into(), Value::Object(mapbox));
        layout.insert("margin".into(), json!({ "l": 0, "r": 0, "t": 40, "b": 0 }));
        return Value::Object(layout);
    }

    let mut yaxis = json!({ "title": { "text": chart.y_label } });
    if let Some([lo, hi]) = chart.y_range {
        yaxis["range"] = json!([lo, hi]);
    }
    layout.insert("xaxis".into(), json!({ "title": { "text": chart.x_label } }));
    layout.insert("yaxis".into(), yaxis);

    if chart.kind == ChartKind::GroupedBar {
        layout.insert("barmode".into(), json!("group"));
    }

    Value::Object(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{GeoPoint, MapPoint};
    use crate::charts::schema::{ChartSpec, Series};

    #[test]
    fn test_line_figure() {
        let mut series = Series::new("gross_rent");
        series.push(2010, 1239.0);
        let chart = ChartSpec::new(ChartKind::Line, "Year", "Average Rent")
            .with_legend(false)
            .with_series(series);

        let fig = to_plotly_figure(&chart).unwrap();

        assert_eq!(fig["data"][0]["type"], "scatter");
        assert_eq!(fig["data"][0]["mode"], "lines");
        assert_eq!(fig["data"][0]["x"], json!([2010]));
        assert_eq!(fig["layout"]["showlegend"], false);
        assert_eq!(fig["layout"]["xaxis"]["title"]["text"], "Year");
    }

    #[test]
    fn test_bar_range_and_grouping() {
        let chart = ChartSpec::new(ChartKind::GroupedBar, "Year", "Price in USD")
            .with_y_range([1.0, 2.0])
            .with_series(Series::new("Rent"));

        let fig = to_plotly_figure(&chart).unwrap();

        assert_eq!(fig["data"][0]["type"], "bar");
        assert_eq!(fig["layout"]["barmode"], "group");
        assert_eq!(fig["layout"]["yaxis"]["range"], json!([1.0, 2.0]));
    }

    #[test]
    fn test_map_figure() {
        let map = MapLayer {
            center: Some(GeoPoint { lat: 37.7, lon: -122.4 }),
            zoom: 10,
            style: "carto-positron".into(),
            color_scale: "thermal".into(),
            size_max: 15,
            points: vec![MapPoint {
                neighborhood: "Marina".into(),
                lat: 37.7,
                lon: -122.4,
                average_rent: 2000.0,
            }],
        };
        let chart = ChartSpec::new(ChartKind::ScatterMap, "Lon", "Lat").with_map(map);

        let fig = to_plotly_figure(&chart).unwrap();

        assert_eq!(fig["data"][0]["type"], "scattermapbox");
        assert_eq!(fig["data"][0]["text"], json!(["Marina"]));
        assert_eq!(fig["layout"]["mapbox"]["center"]["lat"], 37.7);
        assert!(fig["layout"].get("xaxis").is_none());
    }

    #[test]
    fn test_color_scale() {
        assert_eq!(color_scale("Viridis"), json!("Viridis"));
        let thermal = color_scale("thermal");
        assert_eq!(thermal.as_array().unwrap().len(), 12);
        assert_eq!(thermal[0][0], 0.0);
        assert_eq!(thermal[11][0], 1.0);
    }
}
