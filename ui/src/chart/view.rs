use dioxus::prelude::*;

use super::{
    draw::{primitives, Primitive, LABEL_COLOR, LABEL_FONT_SIZE},
    layout::ChartGeometry,
};
use crate::core::snapshot::Bucket;

/// SVG bar chart sized to its container's content box.
///
/// The container reports its size through `onresize`; until the first report the
/// layout uses the fallback canvas.
#[component]
pub fn BucketChart(buckets: Vec<Bucket>) -> Element {
    let mut container = use_signal(|| (0.0_f64, 0.0_f64));
    let (width, height) = container();

    let layout = ChartGeometry::default().layout(&buckets, width, height);
    let view_box = format!("0 0 {} {}", layout.canvas_width, layout.canvas_height);
    let shapes = primitives(&layout);

    rsx! {
        div {
            class: "chart",
            onresize: move |evt| {
                if let Ok(size) = evt.data().get_content_box_size() {
                    container.set((size.width, size.height));
                }
            },
            svg {
                width: "{layout.canvas_width}",
                height: "{layout.canvas_height}",
                view_box: "{view_box}",
                for shape in shapes.into_iter() {
                    {render_primitive(shape)}
                }
            }
        }
    }
}

fn render_primitive(shape: Primitive) -> Element {
    match shape {
        Primitive::Line { line, stroke } => rsx! {
            line {
                x1: "{line.x1}",
                y1: "{line.y1}",
                x2: "{line.x2}",
                y2: "{line.y2}",
                stroke: "{stroke}",
                stroke_width: "1",
            }
        },
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                fill: "{fill}",
            }
        },
        Primitive::Text { x, y, text, anchor } => rsx! {
            text {
                x: "{x}",
                y: "{y}",
                text_anchor: anchor.as_str(),
                fill: LABEL_COLOR,
                font_size: "{LABEL_FONT_SIZE}",
                "{text}"
            }
        },
    }
}
