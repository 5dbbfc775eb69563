// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, layout/hit-testing, and headless rendering (PNG, RGBA) using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::axis::{format_value, Axis};
use crate::curve::{build_path, PathCmd, Pt};
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::grid::Grid;
use crate::scale::{LinearScale, PointScale};
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::tooltip::{place_box, Tooltip, TooltipContent, TooltipRow};
use crate::types::{Insets, HEIGHT, WIDTH};

const TICK_LEN: f32 = 6.0;
const DOT_RADIUS: f32 = 3.0;
const ACTIVE_DOT_RADIUS: f32 = 4.0;
const TOOLTIP_PAD: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Outer margin around the axes and plot.
    pub margin: Insets,
    pub theme: Theme,
    /// Draw tick labels and tooltip text (off in pixel tests to avoid font variance).
    pub draw_labels: bool,
    pub font_size: f32,
    /// Hovered category; drives the cursor, active dots and tooltip.
    pub active_index: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            font_size: 12.0,
            active_index: None,
        }
    }
}

/// Resolved pixel layout for one render size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub plot: RectF,
    pub x: PointScale,
    pub y: LinearScale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    /// Background grid; no grid when `None`.
    pub grid: Option<Grid>,
    pub tooltip: Tooltip,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            x_axis: Axis::category("x", Vec::<String>::new()),
            y_axis: Axis::number("y"),
            series: Vec::new(),
            grid: Some(Grid::default()),
            tooltip: Tooltip::default(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn categories(&self) -> &[String] {
        self.x_axis.labels()
    }

    /// Every series must carry exactly one value per category.
    pub fn validate(&self) -> Result<()> {
        let expected = self.categories().len();
        if expected == 0 {
            return Err(ChartError::NoCategories);
        }
        for s in &self.series {
            if s.values.len() != expected {
                return Err(ChartError::SeriesLength {
                    series: s.name.clone(),
                    expected,
                    actual: s.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Fit the numeric axis to `[min(0, data_min), nice(data_max)]`.
    pub fn autoscale_y(&mut self) {
        let range = self
            .series
            .iter()
            .filter_map(Series::value_range)
            .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)));
        let (lo, hi) = range.unwrap_or((0.0, 1.0));
        self.y_axis.fit_from_zero(lo, hi);
        debug!(min = self.y_axis.min, max = self.y_axis.max, "autoscaled y axis");
    }

    pub fn layout(&self, opts: &RenderOptions) -> Layout {
        let plot = RectF::plot_area(opts.width, opts.height, &opts.margin);
        Layout {
            plot,
            x: PointScale::new(plot.left, plot.right, self.categories().len()),
            y: LinearScale::new(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max),
        }
    }

    /// Nearest category under a pointer at `x_px`, or `None` outside the plot.
    pub fn hit_test(&self, x_px: f32, opts: &RenderOptions) -> Option<usize> {
        let layout = self.layout(opts);
        if !layout.plot.contains_x(x_px) {
            return None;
        }
        layout.x.nearest(x_px)
    }

    /// Tooltip text for a category, `None` when the index is out of range.
    pub fn tooltip_at(&self, index: usize) -> Option<TooltipContent> {
        let label = self.categories().get(index)?.clone();
        let rows = self
            .series
            .iter()
            .filter_map(|s| {
                s.values.get(index).map(|&v| TooltipRow {
                    name: s.name.clone(),
                    value: format_value(v),
                    color: s.color,
                })
            })
            .collect();
        Some(TooltipContent { label, rows })
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }

    /// Render to encoded PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, pixels.as_mut_slice(), row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        self.validate()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        debug!(
            width = opts.width,
            height = opts.height,
            series = self.series.len(),
            active = ?opts.active_index,
            "rendering chart"
        );
        let shaper = opts.draw_labels.then(TextShaper::new);
        self.paint(surface.canvas(), opts, shaper.as_ref());
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: Option<&TextShaper>) {
        let theme = &opts.theme;
        let layout = self.layout(opts);

        // Background
        canvas.clear(theme.background);

        if let Some(grid) = &self.grid {
            draw_grid(canvas, &layout, grid, &self.y_axis, theme);
        }
        draw_axes(canvas, &layout, &self.x_axis, &self.y_axis, opts, text);

        let active = opts
            .active_index
            .filter(|&i| self.tooltip.enabled && i < self.categories().len());

        if let Some(i) = active {
            draw_cursor(canvas, &layout, i, theme);
        }

        for s in &self.series {
            draw_line_series(canvas, &layout, s, theme);
        }

        if let Some(i) = active {
            for s in &self.series {
                draw_active_dot(canvas, &layout, s, i, theme);
            }
            if let Some(content) = self.tooltip_at(i) {
                draw_tooltip(canvas, &layout, i, &content, &self.tooltip, opts, text);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn series_points(layout: &Layout, series: &Series) -> Vec<Pt> {
    series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| (layout.x.to_px(i), layout.y.to_px(v)))
        .collect()
}

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, grid: &Grid, y_axis: &Axis, theme: &Theme) {
    let mut paint = stroke_paint(theme.grid, 1.0);
    if let Some((on, off)) = grid.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    let r = layout.plot;

    if grid.horizontal {
        for tick in y_axis.ticks() {
            let y = layout.y.to_px(tick.value);
            canvas.draw_line((r.left, y), (r.right, y), &paint);
        }
    }
    if grid.vertical {
        for i in 0..layout.x.count {
            let x = layout.x.to_px(i);
            canvas.draw_line((x, r.top), (x, r.bottom), &paint);
        }
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    layout: &Layout,
    x_axis: &Axis,
    y_axis: &Axis,
    opts: &RenderOptions,
    text: Option<&TextShaper>,
) {
    let theme = &opts.theme;
    let r = layout.plot;
    let axis_paint = stroke_paint(theme.axis_line, 1.0);
    let tick_paint = stroke_paint(theme.tick, 1.0);

    // X and Y axis lines
    canvas.draw_line((r.left, r.bottom), (r.right, r.bottom), &axis_paint);
    canvas.draw_line((r.left, r.top), (r.left, r.bottom), &axis_paint);

    for tick in x_axis.ticks() {
        let x = layout.x.to_px(tick.value as usize);
        canvas.draw_line((x, r.bottom), (x, r.bottom + TICK_LEN), &tick_paint);
        if let Some(shaper) = text {
            let baseline = r.bottom + TICK_LEN + opts.font_size + 2.0;
            shaper.draw(canvas, &tick.label, x, baseline, opts.font_size, theme.axis_label, Anchor::Center);
        }
    }

    for tick in y_axis.ticks() {
        let y = layout.y.to_px(tick.value);
        canvas.draw_line((r.left - TICK_LEN, y), (r.left, y), &tick_paint);
        if let Some(shaper) = text {
            let baseline = y + opts.font_size * 0.35;
            shaper.draw(canvas, &tick.label, r.left - TICK_LEN - 2.0, baseline, opts.font_size, theme.axis_label, Anchor::Right);
        }
    }
}

fn draw_cursor(canvas: &skia::Canvas, layout: &Layout, index: usize, theme: &Theme) {
    let x = layout.x.to_px(index);
    let paint = stroke_paint(theme.cursor, 1.0);
    canvas.draw_line((x, layout.plot.top), (x, layout.plot.bottom), &paint);
}

fn draw_line_series(canvas: &skia::Canvas, layout: &Layout, series: &Series, theme: &Theme) {
    let points = series_points(layout, series);
    let color = series.color.unwrap_or(theme.line_stroke);

    if points.len() >= 2 {
        let mut path = skia::Path::new();
        for cmd in build_path(series.curve, &points) {
            match cmd {
                PathCmd::MoveTo(p) => { path.move_to(p); }
                PathCmd::LineTo(p) => { path.line_to(p); }
                PathCmd::CubicTo(c1, c2, p) => { path.cubic_to(c1, c2, p); }
            }
        }
        canvas.draw_path(&path, &stroke_paint(color, series.stroke_width));
    }

    if series.dots {
        let fill = fill_paint(theme.dot_fill);
        let ring = stroke_paint(color, series.stroke_width.max(1.0));
        for &p in &points {
            canvas.draw_circle(p, DOT_RADIUS, &fill);
            canvas.draw_circle(p, DOT_RADIUS, &ring);
        }
    }
}

fn draw_active_dot(canvas: &skia::Canvas, layout: &Layout, series: &Series, index: usize, theme: &Theme) {
    let Some(&v) = series.values.get(index) else { return };
    let center = (layout.x.to_px(index), layout.y.to_px(v));
    let color = series.color.unwrap_or(theme.line_stroke);
    canvas.draw_circle(center, ACTIVE_DOT_RADIUS, &fill_paint(color));
    canvas.draw_circle(center, ACTIVE_DOT_RADIUS, &stroke_paint(theme.dot_fill, 2.0));
}

fn draw_tooltip(
    canvas: &skia::Canvas,
    layout: &Layout,
    index: usize,
    content: &TooltipContent,
    tooltip: &Tooltip,
    opts: &RenderOptions,
    text: Option<&TextShaper>,
) {
    let theme = &opts.theme;
    let size = opts.font_size;
    let line_h = size * 1.5;
    let lines = content.row_lines(&tooltip.separator);

    // rough glyph width stands in when no shaper is available
    let measure = |s: &str| match text {
        Some(shaper) => shaper.measure_width(s, size),
        None => s.chars().count() as f32 * size * 0.6,
    };
    let content_w = std::iter::once(content.label.as_str())
        .chain(lines.iter().map(String::as_str))
        .map(measure)
        .fold(0.0f32, f32::max);
    let box_w = content_w + TOOLTIP_PAD * 2.0;
    let box_h = line_h * (lines.len() + 1) as f32 + TOOLTIP_PAD * 2.0 - (line_h - size);

    let anchor = (layout.x.to_px(index), layout.plot.top + tooltip.offset);
    let (bx, by) = place_box(anchor, box_w, box_h, (opts.width as f32, opts.height as f32), tooltip.offset);
    let rect = skia::Rect::from_xywh(bx, by, box_w, box_h);
    canvas.draw_rect(rect, &fill_paint(theme.tooltip_background));
    canvas.draw_rect(rect, &stroke_paint(theme.tooltip_border, 1.0));

    let Some(shaper) = text else { return };
    let x = bx + TOOLTIP_PAD;
    let mut baseline = by + TOOLTIP_PAD + size;
    shaper.draw(canvas, &content.label, x, baseline, size, theme.tooltip_label, Anchor::Left);
    for (row, line) in content.rows.iter().zip(&lines) {
        baseline += line_h;
        shaper.draw(canvas, line, x, baseline, size, row.color.unwrap_or(theme.line_stroke), Anchor::Left);
    }
}
