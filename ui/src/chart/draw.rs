//! Translate a [`ChartLayout`] into flat vector primitives (lines, rectangles, text).

use super::layout::{ChartLayout, Line};

pub const AXIS_COLOR: &str = "#334155";
pub const GRID_COLOR: &str = "rgba(51, 65, 85, 0.35)";
pub const BAR_COLOR: &str = "#60a5fa";
pub const LABEL_COLOR: &str = "#94a3b8";
pub const LABEL_FONT_SIZE: f64 = 11.0;

/// Gap between the y axis and the right edge of tick labels.
const TICK_LABEL_PAD: f64 = 6.0;
/// Shifts tick labels down so their middle sits on the tick line.
const TICK_LABEL_BASELINE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        line: Line,
        stroke: &'static str,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: &'static str,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
    },
}

/// Paint order: grid, tick labels, axes, then bars with their labels in input order.
pub fn primitives(layout: &ChartLayout) -> Vec<Primitive> {
    let mut shapes = Vec::with_capacity(layout.ticks.len() * 2 + layout.bars.len() * 3 + 2);
    let left = layout.axis.y_line.x1;
    let right = layout.axis.x_line.x2;

    for tick in &layout.ticks {
        // The zero tick coincides with the x axis.
        if tick.value > 0.0 {
            shapes.push(Primitive::Line {
                line: Line {
                    x1: left,
                    y1: tick.y,
                    x2: right,
                    y2: tick.y,
                },
                stroke: GRID_COLOR,
            });
        }
        shapes.push(Primitive::Text {
            x: left - TICK_LABEL_PAD,
            y: tick.y + TICK_LABEL_BASELINE,
            text: tick.label.clone(),
            anchor: TextAnchor::End,
        });
    }

    shapes.push(Primitive::Line {
        line: layout.axis.y_line,
        stroke: AXIS_COLOR,
    });
    shapes.push(Primitive::Line {
        line: layout.axis.x_line,
        stroke: AXIS_COLOR,
    });

    for bar in &layout.bars {
        shapes.push(Primitive::Rect {
            x: bar.x,
            y: bar.y,
            width: bar.width,
            height: bar.height,
            fill: BAR_COLOR,
        });
        for label in [&bar.value_label, &bar.category_label] {
            shapes.push(Primitive::Text {
                x: label.x,
                y: label.y,
                text: label.text.clone(),
                anchor: TextAnchor::Middle,
            });
        }
    }

    shapes
}
