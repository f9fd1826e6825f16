//! HTML dashboard writer.
//!
//! Produces a single page: a header, one tab per panel, a collapsible
//! `<details>` block per section and a plotly.js figure inside each.
//! plotly.js itself is pulled from its CDN.

use super::{ensure_parent_dir, validate_path};
use crate::charts::to_plotly_figure;
use crate::dashboard::{Dashboard, Panel};
use crate::utils::config::PLOTLY_CDN_URL;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 2rem auto; max-width: 1100px; color: #222; }
.tabs button { font-size: 1rem; padding: .5rem 1rem; border: none; background: #eee; cursor: pointer; }
.tabs button.active { background: #ff4b4b; color: white; }
.panel { display: none; padding-top: 1rem; }
.panel.active { display: block; }
details { margin-bottom: 1rem; border: 1px solid #ddd; border-radius: 4px; padding: .5rem 1rem; }
summary { font-weight: bold; cursor: pointer; }
.chart { width: 100%; height: 480px; }
</style>"#;

// Plotly sizes hidden plots to zero width, so resize when a tab or
// section opens.
const TAB_SCRIPT: &str = r#"<script>
function showPanel(id) {
  document.querySelectorAll('.panel').forEach(p => p.classList.toggle('active', p.id === id));
  document.querySelectorAll('.tabs button').forEach(b => b.classList.toggle('active', b.dataset.panel === id));
  document.querySelectorAll('#' + id + ' .chart').forEach(c => Plotly.Plots.resize(c));
}
document.querySelectorAll('details').forEach(d => d.addEventListener('toggle', () => {
  d.querySelectorAll('.chart').forEach(c => Plotly.Plots.resize(c));
}));
</script>"#;

/// Render the dashboard to an HTML string
///
/// **Public** - main entry point for HTML rendering
///
/// # Errors
/// * `OutputError::ChartFailed` - a chart could not be converted to a figure
/// * `OutputError::FormatFailed` - a `Display` impl reported an error
pub fn render_html(dashboard: &Dashboard) -> Result<String, OutputError> {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(out, "<title>{}</title>", escape_html(&dashboard.title))?;
    writeln!(out, "<script src=\"{}\"></script>", PLOTLY_CDN_URL)?;
    out.push_str(STYLE);
    out.push_str("\n</head>\n<body>\n");

    writeln!(out, "<h1>{}</h1>", escape_html(&dashboard.title))?;
    writeln!(out, "<p>{}</p>", escape_html(&dashboard.blurb))?;

    out.push_str("<div class=\"tabs\">\n");
    for (i, panel) in dashboard.panels.iter().enumerate() {
        let id = panel_id(i);
        writeln!(
            out,
            "<button data-panel=\"{id}\" class=\"{}\" onclick=\"showPanel('{id}')\">{}</button>",
            if i == 0 { "active" } else { "" },
            escape_html(&panel.name),
        )?;
    }
    out.push_str("</div>\n");

    let mut chart_index = 0;
    for (i, panel) in dashboard.panels.iter().enumerate() {
        render_panel(&mut out, panel, i, &mut chart_index)?;
    }

    out.push_str(TAB_SCRIPT);
    writeln!(
        out,
        "\n<footer><small>Generated {} (schema v{})</small></footer>",
        escape_html(&dashboard.generated_at),
        escape_html(&dashboard.version)
    )?;
    out.push_str("</body>\n</html>\n");

    debug!("Rendered {} charts into {} bytes of HTML", chart_index, out.len());
    Ok(out)
}

/// **Private** - one tab's content
fn render_panel(
    out: &mut String,
    panel: &Panel,
    index: usize,
    chart_index: &mut usize,
) -> Result<(), OutputError> {
    writeln!(
        out,
        "<section id=\"{}\" class=\"panel{}\">",
        panel_id(index),
        if index == 0 { " active" } else { "" }
    )?;
    writeln!(out, "<h2>{}</h2>", escape_html(&panel.name))?;

    for section in &panel.sections {
        let figure = to_plotly_figure(&section.chart)?;
        let div_id = format!("chart-{}", chart_index);
        *chart_index += 1;

        writeln!(
            out,
            "<details{}>\n<summary>{}</summary>",
            if section.expanded { " open" } else { "" },
            escape_html(&section.heading)
        )?;
        writeln!(out, "<div id=\"{}\" class=\"chart\"></div>", div_id)?;
        writeln!(
            out,
            "<script>(function() {{ const fig = {}; Plotly.newPlot('{}', fig.data, fig.layout, {{responsive: true}}); }})();</script>",
            escape_script(&figure.to_string()),
            div_id
        )?;
        out.push_str("</details>\n");
    }

    out.push_str("</section>\n");
    Ok(())
}

/// Write rendered HTML to a file
///
/// **Public** - mirrors `write_dashboard` for the HTML page
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_html(html: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    if let Some(ext) = output_path.extension() {
        if ext != "html" && ext != "htm" {
            debug!("Warning: File does not have .html extension: {}", output_path.display());
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(html.as_bytes()).map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "HTML written successfully ({} bytes, {:.2} KB)",
        html.len(),
        html.len() as f64 / 1024.0
    );

    Ok(())
}

fn panel_id(index: usize) -> String {
    format!("panel-{}", index)
}

/// Escape text for element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// JSON inside <script> must not close the tag early
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::build_dashboard;
    use crate::parser::schema::{CensusData, CensusRecord, CoordinateTable};
    use tempfile::NamedTempFile;

    fn sample_html(neighborhood: &str) -> String {
        let data = CensusData::new(vec![CensusRecord::new(2010, neighborhood, 500.0, 372_560.0, 1239.0)]);
        let dashboard = build_dashboard(&data, &CoordinateTable::default(), neighborhood);
        render_html(&dashboard).unwrap()
    }

    #[test]
    fn test_render_html_structure() {
        let html = sample_html("Marina");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_CDN_URL));
        assert_eq!(html.matches("class=\"chart\"").count(), 8);
        assert_eq!(html.matches("<details open>").count(), 6);
        assert!(html.contains(">Yearly averages</button>"));
        assert!(html.contains(">Mapped</button>"));
    }

    #[test]
    fn test_render_html_escapes_names() {
        let html = sample_html("<b>Bad & Co</b>");

        assert!(html.contains("Average Yearly Rent for &lt;b&gt;Bad &amp; Co&lt;/b&gt;"));
        assert!(!html.contains("</b> Neighborhood"));
    }

    #[test]
    fn test_render_html_complete_page() {
        let html = sample_html("Marina");

        assert_eq!(html.matches("<section id=\"panel-").count(), 4);
        assert_eq!(html.matches("</details>").count(), 8);
        assert!(html.contains("<title>San Francisco Real Estate Analysis</title>"));
        assert!(html.contains("(schema v1.0.0)</small></footer>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_format_error_converts() {
        let err: OutputError = std::fmt::Error.into();
        assert!(matches!(err, OutputError::FormatFailed(_)));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a<b>"c"&'d'"#), "a&lt;b&gt;&quot;c&quot;&amp;&#39;d&#39;");
    }

    #[test]
    fn test_write_html() {
        let temp_file = NamedTempFile::new().unwrap();
        write_html("<html></html>", temp_file.path()).unwrap();
        assert_eq!(std::fs::read_to_string(temp_file.path()).unwrap(), "<html></html>");
    }
}
