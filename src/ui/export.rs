//! Export utilities: render the committed layout to SVG and PNG.
//!
//! Both formats come from the same [`Scene`] the canvas paints, so an export
//! looks like the kiosk view at scale 1 with the guest's seat highlighted.

use super::state::{FileOperationResult, SeatingApp, View};
use crate::error::SeatingError;
use crate::types::Layout;
use crate::widget::{Primitive, Scene};
use eframe::egui::{self, Color32, Stroke};
use std::fmt::Write as _;
use std::sync::Arc;

/// Blank space around the exported shapes, in canvas units.
pub const EXPORT_MARGIN: f32 = 24.0;

/// Size used when exporting an empty layout.
const EMPTY_EXPORT_SIZE: f32 = 100.0;

impl SeatingApp {
    /// Seat highlighted in exports: the guest's seat, kiosk view only.
    fn export_highlight(&self) -> Option<&str> {
        match self.settings.view {
            View::Kiosk => self.guest_seat.as_deref(),
            View::Editor => None,
        }
    }

    /// Export to SVG through a save dialog.
    pub fn export_svg(&mut self, ctx: &egui::Context) {
        let (svg, _w, _h) = build_svg(&self.layout, self.export_highlight(), EXPORT_MARGIN);
        let bytes = svg.into_bytes();
        self.spawn_export(ctx, "SVG", "svg", "layout.svg", async move { Ok(bytes) });
    }

    /// Export to PNG through a save dialog.
    ///
    /// The SVG is built here from the committed layout; rasterising happens on
    /// a blocking worker while the dialog is open.
    pub fn export_png(&mut self, ctx: &egui::Context) {
        let (svg, width, height) = build_svg(&self.layout, self.export_highlight(), EXPORT_MARGIN);
        let scale = self.settings.png_scale;
        self.spawn_export(
            ctx,
            "PNG",
            "png",
            "layout.png",
            rasterise(svg, width, height, scale),
        );
    }

    fn spawn_export<F>(
        &mut self,
        ctx: &egui::Context,
        filter: &'static str,
        extension: &'static str,
        file_name: &'static str,
        bytes: F,
    ) where
        F: std::future::Future<Output = Result<Vec<u8>, SeatingError>> + Send + 'static,
    {
        let ctx = ctx.clone();
        let sender = self.file.sender.clone();
        tokio::spawn(async move {
            let bytes = tokio::spawn(bytes);
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter(filter, &[extension])
                .set_file_name(file_name)
                .save_file()
                .await
            else {
                bytes.abort();
                ctx.request_repaint();
                return;
            };

            let path = handle.path();
            let written = match bytes.await {
                Ok(Ok(bytes)) => std::fs::write(path, &bytes).map_err(SeatingError::from),
                Ok(Err(e)) => Err(e),
                Err(e) => Err(SeatingError::Task(e.to_string())),
            };
            let result = match written {
                Ok(()) => FileOperationResult::ExportCompleted(path.display().to_string()),
                Err(e) => FileOperationResult::OperationFailed(e.to_string()),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }
}

/// Rasterises and encodes an SVG to PNG bytes on tokio's blocking pool.
pub async fn rasterise(svg: String, width: u32, height: u32, scale: f32) -> Result<Vec<u8>, SeatingError> {
    tokio::task::spawn_blocking(move || -> Result<Vec<u8>, SeatingError> {
        render_png(&svg, width, height, scale)?
            .encode_png()
            .map_err(|e| SeatingError::Png(e.to_string()))
    })
    .await
    .map_err(|e| SeatingError::Task(e.to_string()))?
}

/// Builds an SVG document for a layout. Returns `(svg, width, height)`.
///
/// Shapes are translated so the layout bounds start at `margin`.
pub fn build_svg(layout: &Layout, highlight: Option<&str>, margin: f32) -> (String, u32, u32) {
    let margin = margin.max(0.0);
    let ((min_x, min_y), (max_x, max_y)) = layout
        .bounds()
        .unwrap_or(((0.0, 0.0), (EMPTY_EXPORT_SIZE, EMPTY_EXPORT_SIZE)));

    let width = ((max_x - min_x) + 2.0 * margin).ceil().max(1.0) as u32;
    let height = ((max_y - min_y) + 2.0 * margin).ceil().max(1.0) as u32;
    let map = |p: egui::Pos2| (p.x - min_x + margin, p.y - min_y + margin);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#ffffff\" />"
    );

    let scene = Scene::build(layout, highlight, None);
    for shape in &scene.shapes {
        if shape.opacity < 1.0 {
            let _ = writeln!(
                out,
                "<g id=\"{}\" opacity=\"{:.2}\">",
                escape_xml(&shape.id),
                shape.opacity
            );
        } else {
            let _ = writeln!(out, "<g id=\"{}\">", escape_xml(&shape.id));
        }

        for primitive in &shape.primitives {
            match primitive {
                Primitive::Circle {
                    center,
                    radius,
                    fill,
                    stroke,
                } => {
                    let (cx, cy) = map(*center);
                    let _ = writeln!(
                        out,
                        "  <circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{radius:.1}\" {} {} />",
                        fill_attrs(*fill),
                        stroke_attrs(*stroke)
                    );
                }
                Primitive::DashedRing {
                    center,
                    radius,
                    stroke,
                    dash,
                } => {
                    let (cx, cy) = map(*center);
                    let _ = writeln!(
                        out,
                        "  <circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{radius:.1}\" fill=\"none\" {} stroke-dasharray=\"{dash} {dash}\" />",
                        stroke_attrs(*stroke)
                    );
                }
                Primitive::Rect {
                    rect,
                    corner_radius,
                    fill,
                    stroke,
                } => {
                    let (x, y) = map(rect.min);
                    let _ = writeln!(
                        out,
                        "  <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"{r}\" ry=\"{r}\" {} {} />",
                        rect.width(),
                        rect.height(),
                        fill_attrs(*fill),
                        stroke_attrs(*stroke),
                        r = corner_radius
                    );
                }
                Primitive::Label {
                    center,
                    text,
                    font_size,
                    color,
                } => {
                    if text.is_empty() {
                        continue;
                    }
                    let (x, y) = map(*center);
                    let _ = writeln!(
                        out,
                        "  <text x=\"{x:.1}\" y=\"{y:.1}\" font-size=\"{font_size}\" font-family=\"sans-serif\" {} text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
                        fill_attrs(*color),
                        escape_xml(text)
                    );
                }
            }
        }
        let _ = writeln!(out, "</g>");
    }

    let _ = writeln!(out, "</svg>");
    (out, width, height)
}

/// Rasterises an SVG produced by [`build_svg`].
pub fn render_png(svg: &str, width: u32, height: u32, scale: f32) -> Result<tiny_skia::Pixmap, SeatingError> {
    let mut opt = usvg::Options::default();
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    opt.fontdb = Arc::new(db);

    let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)?;

    let scale = scale.clamp(0.25, 8.0);
    let out_w = ((width as f32) * scale).round().max(1.0) as u32;
    let out_h = ((height as f32) * scale).round().max(1.0) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(out_w, out_h).ok_or(SeatingError::Pixmap {
        width: out_w,
        height: out_h,
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

fn fill_attrs(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    format!("fill=\"#{r:02x}{g:02x}{b:02x}\" fill-opacity=\"{:.2}\"", a as f32 / 255.0)
}

fn stroke_attrs(stroke: Stroke) -> String {
    let [r, g, b, a] = stroke.color.to_srgba_unmultiplied();
    format!(
        "stroke=\"#{r:02x}{g:02x}{b:02x}\" stroke-opacity=\"{:.2}\" stroke-width=\"{}\"",
        a as f32 / 255.0,
        stroke.width
    )
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Seat, Table};

    fn layout() -> Layout {
        Layout {
            tables: vec![
                Table::round("t1", "Table <1>", (50.0, 50.0), 40.0),
                Table::rectangle("t2", "", (200.0, 100.0), 120.0, 60.0).with_seat_count(8),
            ],
            seats: vec![Seat::new("s1", "A1", (110.0, 50.0), Some("t1"))],
        }
    }

    #[test]
    fn svg_has_one_group_per_shape() {
        let (svg, _, _) = build_svg(&layout(), None, EXPORT_MARGIN);
        assert_eq!(svg.matches("<g id=").count(), 3);
        assert_eq!(svg.matches("<rect ").count(), 2); // background + rectangle table
        assert!(svg.contains(">8</text>"));
        assert!(svg.contains("Table &lt;1&gt;"));
    }

    #[test]
    fn dashed_ring_only_when_highlighted() {
        let (plain, _, _) = build_svg(&layout(), None, EXPORT_MARGIN);
        assert!(!plain.contains("stroke-dasharray"));

        let (highlighted, _, _) = build_svg(&layout(), Some("s1"), EXPORT_MARGIN);
        assert_eq!(highlighted.matches("stroke-dasharray").count(), 1);
        assert!(highlighted.contains("fill=\"#3b82f6\""));
    }

    #[test]
    fn dimensions_cover_bounds_plus_margin() {
        // Bounds run from (10, 10) to (320, 160).
        let (_, w, h) = build_svg(&layout(), None, 10.0);
        assert_eq!((w, h), (330, 170));

        let (svg, w, h) = build_svg(&Layout::new(), None, 0.0);
        assert_eq!((w, h), (100, 100));
        assert!(!svg.contains("<g id="));
    }

    #[test]
    fn png_is_scaled() {
        let (svg, w, h) = build_svg(&layout(), Some("s1"), EXPORT_MARGIN);
        let pixmap = render_png(&svg, w, h, 2.0).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (w * 2, h * 2));
    }

    #[tokio::test]
    async fn rasterise_produces_png_bytes() {
        let (svg, w, h) = build_svg(&layout(), None, EXPORT_MARGIN);
        let bytes = rasterise(svg, w, h, 1.0).await.unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn rasterise_reports_render_errors() {
        let result = rasterise("not svg".into(), 10, 10, 1.0).await;
        assert!(matches!(result, Err(SeatingError::Svg(_))));
    }

    #[test]
    fn invalid_svg_is_an_error() {
        assert!(matches!(
            render_png("not svg", 10, 10, 1.0),
            Err(SeatingError::Svg(_))
        ));
    }
}
