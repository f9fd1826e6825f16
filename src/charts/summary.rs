//! Plain-text rendering of charts for the terminal.

use super::schema::{ChartKind, ChartSpec};

const LABEL_WIDTH: usize = 30;
const BAR_WIDTH: usize = 30;

/// Render a titled table for every chart
///
/// **Public** - printed by `render --summary`
///
/// # Arguments
/// * `sections` - `(heading, chart)` pairs in display order
/// * `max_rows` - rows shown per series before truncating
pub fn generate_text_summary<'a, I>(sections: I, max_rows: usize) -> String
where
    I: IntoIterator<Item = (&'a str, &'a ChartSpec)>,
{
    sections
        .into_iter()
        .map(|(heading, chart)| chart_table(heading, chart, max_rows))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one chart as a labelled bar table
///
/// **Public** - bars are scaled to the largest value in each series
pub fn chart_table(heading: &str, chart: &ChartSpec, max_rows: usize) -> String {
    let mut lines = vec![format!("  ▶ {}", heading)];
    lines.push(format!("  {}", "━".repeat(LABEL_WIDTH + BAR_WIDTH + 18)));

    if chart.is_empty() {
        lines.push("  (no data)".to_string());
        return lines.join("\n");
    }

    if chart.kind == ChartKind::ScatterMap {
        if let Some(map) = &chart.map {
            let mut points: Vec<_> = map.points.iter().collect();
            points.sort_by(|a, b| b.average_rent.total_cmp(&a.average_rent));
            let max = points.first().map_or(0.0, |p| p.average_rent);
            for p in points.iter().take(max_rows) {
                lines.push(row(&p.neighborhood, p.average_rent, max));
            }
            push_truncation(&mut lines, map.points.len(), max_rows);
        }
        return lines.join("\n");
    }

    let multi = chart.series.len() > 1;
    for series in &chart.series {
        if multi {
            lines.push(format!("  {}", series.name));
        }
        let max = series.y.iter().cloned().fold(0.0_f64, f64::max);
        for (x, y) in series.x.iter().zip(&series.y).take(max_rows) {
            lines.push(row(&x.to_string(), *y, max));
        }
        push_truncation(&mut lines, series.len(), max_rows);
    }

    lines.join("\n")
}

fn row(label: &str, value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let label = if label.chars().count() > LABEL_WIDTH {
        let cut: String = label.chars().take(LABEL_WIDTH - 3).collect();
        format!("{}...", cut)
    } else {
        label.to_string()
    };
    format!(
        "  {:<lw$} {:<bw$} {:>14.2}",
        label,
        "█".repeat(filled.min(BAR_WIDTH)),
        value,
        lw = LABEL_WIDTH,
        bw = BAR_WIDTH
    )
}

fn push_truncation(lines: &mut Vec<String>, total: usize, max_rows: usize) {
    if total > max_rows {
        lines.push(format!("   (Showing {} of {} rows)", max_rows, total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::schema::Series;

    #[test]
    fn test_chart_table_rows() {
        let mut series = Series::new("gross_rent");
        series.push(2010, 1000.0);
        series.push(2011, 2000.0);
        let chart = ChartSpec::new(ChartKind::Line, "Year", "Rent").with_series(series);

        let text = chart_table("Average Gross Rent per Year", &chart, 10);

        assert!(text.contains("Average Gross Rent per Year"));
        assert!(text.contains("2010"));
        assert!(text.contains("2000.00"));
        assert!(text.contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_chart_table_empty_and_truncated() {
        let empty = ChartSpec::new(ChartKind::Line, "Year", "Rent").with_series(Series::new("gross_rent"));
        assert!(chart_table("Rent", &empty, 5).contains("(no data)"));

        let mut series = Series::new("sale_price_sqr_foot");
        for year in 2010..2016 {
            series.push(year, 100.0);
        }
        let chart = ChartSpec::new(ChartKind::Bar, "Year", "Price").with_series(series);
        assert!(chart_table("Price", &chart, 3).contains("Showing 3 of 6 rows"));
    }
}
