//! SVG Bar Chart
//!
//! Grouped bar chart with symmetric error bars: one slot per category, one
//! bar per series inside each slot. Bars whose value is NaN are skipped,
//! and so are error bars whose half-width is NaN.

/// Color theme for rendered charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// White background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl Theme {
    fn background(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#1e1e1e",
        }
    }

    fn foreground(self) -> &'static str {
        match self {
            Theme::Light => "#222222",
            Theme::Dark => "#e0e0e0",
        }
    }

    fn grid(self) -> &'static str {
        match self {
            Theme::Light => "#e5e5e5",
            Theme::Dark => "#3a3a3a",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Canvas size and colors
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Background and text colors
    pub theme: Theme,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            theme: Theme::Light,
        }
    }
}

/// One bar per category, with its error half-width
#[derive(Debug, Clone)]
pub struct BarSeries {
    /// Legend label
    pub label: String,
    /// values[category_idx]
    pub values: Vec<f64>,
    /// errors[category_idx], drawn as value +/- error
    pub errors: Vec<f64>,
}

/// Everything needed to draw a grouped bar chart
#[derive(Debug, Clone)]
pub struct ChartData {
    /// Heading above the plot
    pub title: String,
    /// X axis caption
    pub x_label: String,
    /// Y axis caption
    pub y_label: String,
    /// Category labels along the x axis, in drawing order
    pub categories: Vec<String>,
    /// Bars drawn side by side in each category
    pub series: Vec<BarSeries>,
}

/// Fraction of a category slot taken by one bar
const BAR_WIDTH: f64 = 0.35;
/// Half-width of an error bar cap, in pixels
const CAP_HALF_WIDTH: f64 = 5.0;
const Y_TICKS: usize = 5;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;
const PALETTE: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

/// Render a grouped bar chart as a standalone SVG document
pub fn render_bar_chart(data: &ChartData, style: &ChartStyle) -> String {
    let width = style.width as f64;
    let height = style.height as f64;
    let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let plot_bottom = MARGIN_TOP + plot_h;
    let fg = style.theme.foreground();

    let y_max = y_axis_max(data);
    let to_y = |v: f64| plot_bottom - (v / y_max) * plot_h;

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        style.width, style.height, style.width, style.height
    ));
    svg.push_str("  <style>\n");
    svg.push_str(&format!(
        "    text {{ font-family: sans-serif; font-size: 12px; fill: {}; }}\n",
        fg
    ));
    svg.push_str("    .title { font-size: 16px; font-weight: bold; }\n");
    svg.push_str("  </style>\n");
    svg.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        style.theme.background()
    ));

    svg.push_str(&format!(
        "  <text class=\"title\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        MARGIN_TOP / 2.0 + 5.0,
        escape_xml(&data.title)
    ));

    // Horizontal grid lines with y tick labels
    for i in 0..=Y_TICKS {
        let value = y_max * i as f64 / Y_TICKS as f64;
        let y = to_y(value);
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\"/>\n",
            MARGIN_LEFT,
            y,
            MARGIN_LEFT + plot_w,
            y,
            style.theme.grid()
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{}</text>\n",
            MARGIN_LEFT - 8.0,
            y + 4.0,
            format_tick(value)
        ));
    }

    // Axes
    svg.push_str(&format!(
        "  <line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"{fg}\"/>\n",
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = plot_bottom,
    ));
    svg.push_str(&format!(
        "  <line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"{fg}\"/>\n",
        l = MARGIN_LEFT,
        r = MARGIN_LEFT + plot_w,
        b = plot_bottom,
    ));

    let slot_w = plot_w / data.categories.len().max(1) as f64;
    let bar_w = BAR_WIDTH * slot_w;
    let series_count = data.series.len() as f64;

    for (cat_idx, category) in data.categories.iter().enumerate() {
        let slot_center = MARGIN_LEFT + (cat_idx as f64 + 0.5) * slot_w;

        for (series_idx, series) in data.series.iter().enumerate() {
            let offset = (series_idx as f64 - (series_count - 1.0) / 2.0) * bar_w;
            let center = slot_center + offset;
            let value = series.values.get(cat_idx).copied().unwrap_or(f64::NAN);
            if value.is_nan() {
                continue;
            }

            let top = to_y(value.max(0.0));
            svg.push_str(&format!(
                "  <rect class=\"bar\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
                center - bar_w / 2.0,
                top,
                bar_w,
                plot_bottom - top,
                PALETTE[series_idx % PALETTE.len()]
            ));

            let error = series.errors.get(cat_idx).copied().unwrap_or(f64::NAN);
            if error.is_nan() {
                continue;
            }
            let y_lo = to_y((value - error).max(0.0));
            let y_hi = to_y(value + error);
            svg.push_str(&format!(
                "  <path class=\"error-bar\" d=\"M{c:.1},{lo:.1} V{hi:.1} M{cl:.1},{hi:.1} H{cr:.1} M{cl:.1},{lo:.1} H{cr:.1}\" stroke=\"{fg}\" fill=\"none\"/>\n",
                c = center,
                lo = y_lo,
                hi = y_hi,
                cl = center - CAP_HALF_WIDTH,
                cr = center + CAP_HALF_WIDTH,
            ));
        }

        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>\n",
            slot_center,
            plot_bottom + 18.0,
            escape_xml(category)
        ));
    }

    // Axis labels
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        height - 20.0,
        escape_xml(&data.x_label)
    ));
    svg.push_str(&format!(
        "  <text x=\"20\" y=\"{y:.1}\" text-anchor=\"middle\" transform=\"rotate(-90 20 {y:.1})\">{}</text>\n",
        escape_xml(&data.y_label),
        y = MARGIN_TOP + plot_h / 2.0,
    ));

    // Legend, top right
    let legend_x = MARGIN_LEFT + plot_w - 90.0;
    for (series_idx, series) in data.series.iter().enumerate() {
        let y = MARGIN_TOP + 10.0 + series_idx as f64 * 20.0;
        svg.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"14\" height=\"14\" fill=\"{}\"/>\n",
            legend_x,
            y,
            PALETTE[series_idx % PALETTE.len()]
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\">{}</text>\n",
            legend_x + 20.0,
            y + 11.0,
            escape_xml(&series.label)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Top of the y axis: the highest bar or error-bar tip plus 10% headroom
fn y_axis_max(data: &ChartData) -> f64 {
    let highest = data
        .series
        .iter()
        .flat_map(|s| {
            s.values.iter().enumerate().map(|(i, v)| {
                let err = s.errors.get(i).copied().filter(|e| e.is_finite());
                v + err.unwrap_or(0.0)
            })
        })
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    if highest > 0.0 { highest * 1.1 } else { 1.0 }
}

fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else if value.abs() >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.3}", value)
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
