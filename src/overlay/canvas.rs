use crate::core::Viewport;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Two-circle radial gradient with CSS color stops.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<(f64, String)>,
}

/// The 2D drawing surface the overlay paints on. Mirrors the subset of the
/// browser's 2D context the layers use, so headless surfaces can stand in.
pub trait Canvas {
    fn viewport(&self) -> Viewport;

    fn clear(&mut self);

    fn set_stroke_color(&mut self, css: &str);
    fn set_fill_color(&mut self, css: &str);
    fn set_fill_gradient(&mut self, gradient: &RadialGradient);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_font(&mut self, css: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn stroke_text(&mut self, text: &str, x: f64, y: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Stroke a single straight segment as its own path.
    fn line(&mut self, from: DVec2, to: DVec2) {
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
    }
}

#[cfg(target_arch = "wasm32")]
mod web_canvas {
    use super::{Canvas, RadialGradient, TextAlign};
    use crate::core::Viewport;
    use web_sys as web;

    impl Canvas for web::CanvasRenderingContext2d {
        fn viewport(&self) -> Viewport {
            self.canvas()
                .map(|c| Viewport::new(c.width() as f64, c.height() as f64))
                .unwrap_or(Viewport::new(0.0, 0.0))
        }

        fn clear(&mut self) {
            let vp = Canvas::viewport(self);
            self.clear_rect(0.0, 0.0, vp.width, vp.height);
        }

        fn set_stroke_color(&mut self, css: &str) {
            self.set_stroke_style_str(css);
        }

        fn set_fill_color(&mut self, css: &str) {
            self.set_fill_style_str(css);
        }

        fn set_fill_gradient(&mut self, g: &RadialGradient) {
            let gradient = match self.create_radial_gradient(
                g.center.x,
                g.center.y,
                g.inner_radius.max(0.0),
                g.center.x,
                g.center.y,
                g.outer_radius.max(0.0),
            ) {
                Ok(gradient) => gradient,
                Err(e) => {
                    log::warn!("[overlay] radial gradient rejected: {:?}", e);
                    return;
                }
            };
            for (offset, color) in &g.stops {
                _ = gradient.add_color_stop(*offset as f32, color);
            }
            self.set_fill_style_canvas_gradient(&gradient);
        }

        fn set_line_width(&mut self, width: f64) {
            web::CanvasRenderingContext2d::set_line_width(self, width);
        }

        fn begin_path(&mut self) {
            web::CanvasRenderingContext2d::begin_path(self);
        }

        fn move_to(&mut self, x: f64, y: f64) {
            web::CanvasRenderingContext2d::move_to(self, x, y);
        }

        fn line_to(&mut self, x: f64, y: f64) {
            web::CanvasRenderingContext2d::line_to(self, x, y);
        }

        fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
            web::CanvasRenderingContext2d::quadratic_curve_to(self, cx, cy, x, y);
        }

        fn close_path(&mut self) {
            web::CanvasRenderingContext2d::close_path(self);
        }

        fn stroke(&mut self) {
            web::CanvasRenderingContext2d::stroke(self);
        }

        fn fill(&mut self) {
            web::CanvasRenderingContext2d::fill(self);
        }

        fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            web::CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
        }

        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            web::CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
        }

        fn set_font(&mut self, css: &str) {
            web::CanvasRenderingContext2d::set_font(self, css);
        }

        fn set_text_align(&mut self, align: TextAlign) {
            web::CanvasRenderingContext2d::set_text_align(self, align.as_css());
        }

        fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
            _ = web::CanvasRenderingContext2d::stroke_text(self, text, x, y);
        }

        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            _ = web::CanvasRenderingContext2d::fill_text(self, text, x, y);
        }
    }
}
