//! Headless canvas that records what the layers draw.

use crate::core::Viewport;
use crate::overlay::canvas::{Canvas, RadialGradient, TextAlign};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(String),
    Radial(RadialGradient),
}

impl Paint {
    pub fn css(&self) -> Option<&str> {
        match self {
            Paint::Solid(s) => Some(s),
            Paint::Radial(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo(DVec2, DVec2),
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// One completed draw call, with the style that was current when it ran.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Stroke {
        color: String,
        width: f64,
        path: Vec<PathOp>,
    },
    Fill {
        paint: Paint,
        path: Vec<PathOp>,
    },
    StrokeRect {
        color: String,
        width: f64,
        rect: Rect,
    },
    FillRect {
        paint: Paint,
        rect: Rect,
    },
    StrokeText {
        color: String,
        width: f64,
        font: String,
        align: TextAlign,
        text: String,
        at: DVec2,
    },
    FillText {
        paint: Paint,
        font: String,
        align: TextAlign,
        text: String,
        at: DVec2,
    },
}

#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    pub viewport: Viewport,
    pub ops: Vec<DrawOp>,
    stroke_color: String,
    fill: Paint,
    line_width: f64,
    font: String,
    align: TextAlign,
    path: Vec<PathOp>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            ops: Vec::new(),
            stroke_color: "#000".into(),
            fill: Paint::Solid("#000".into()),
            line_width: 1.0,
            font: "10px sans-serif".into(),
            align: TextAlign::Left,
            path: Vec::new(),
        }
    }

    /// Ops issued since the most recent clear.
    pub fn visible_ops(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// True when nothing has been drawn since the last clear.
    pub fn is_blank(&self) -> bool {
        self.visible_ops().is_empty()
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&str, f64, &[PathOp])> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Stroke { color, width, path } => Some((color.as_str(), *width, path.as_slice())),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Paint, &[PathOp])> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Fill { paint, path } => Some((paint, path.as_slice())),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.ops.clear();
        self.path.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_stroke_color(&mut self, css: &str) {
        self.stroke_color = css.to_string();
    }

    fn set_fill_color(&mut self, css: &str) {
        self.fill = Paint::Solid(css.to_string());
    }

    fn set_fill_gradient(&mut self, gradient: &RadialGradient) {
        self.fill = Paint::Radial(gradient.clone());
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::MoveTo(DVec2::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(PathOp::LineTo(DVec2::new(x, y)));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.path
            .push(PathOp::QuadTo(DVec2::new(cx, cy), DVec2::new(x, y)));
    }

    fn close_path(&mut self) {
        self.path.push(PathOp::Close);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke {
            color: self.stroke_color.clone(),
            width: self.line_width,
            path: self.path.clone(),
        });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill {
            paint: self.fill.clone(),
            path: self.path.clone(),
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::StrokeRect {
            color: self.stroke_color.clone(),
            width: self.line_width,
            rect: Rect { x, y, w, h },
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::FillRect {
            paint: self.fill.clone(),
            rect: Rect { x, y, w, h },
        });
    }

    fn set_font(&mut self, css: &str) {
        self.font = css.to_string();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::StrokeText {
            color: self.stroke_color.clone(),
            width: self.line_width,
            font: self.font.clone(),
            align: self.align,
            text: text.to_string(),
            at: DVec2::new(x, y),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            paint: self.fill.clone(),
            font: self.font.clone(),
            align: self.align,
            text: text.to_string(),
            at: DVec2::new(x, y),
        });
    }
}
