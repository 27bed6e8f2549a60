//! Chart layout and scaling.
//!
//! [`ChartGeometry::layout`] maps `(buckets, container width, container height)` to a
//! complete [`ChartLayout`]: axis lines, tick marks and one bar (with its labels) per
//! bucket. The mapping is a pure function of its inputs, so identical inputs always
//! produce identical geometry.
//!
//! Degenerate inputs are handled by floors rather than errors:
//! - a non-positive (not yet laid out) container uses the fallback canvas size;
//! - the drawing area never goes negative, the axes stay inside the margins;
//! - the scale domain is at least 1, so empty or all-zero data never divides by zero;
//! - bars never get narrower than `min_bar_width` (they may overflow the drawing
//!   width when there are too many of them) nor shorter than `min_bar_height`.

use crate::core::{
    format::{display_text, format_number, format_percent},
    snapshot::Bucket,
};

/// Fixed margins and floors of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// Room for the y axis and its tick labels.
    pub left_margin: f64,
    pub right_margin: f64,
    /// Room for value labels above the tallest bar.
    pub top_margin: f64,
    /// Room for the x axis and category labels.
    pub bottom_margin: f64,
    pub bar_gap: f64,
    /// Number of tick intervals; the axis carries `tick_count + 1` ticks.
    pub tick_count: usize,
    pub min_bar_width: f64,
    pub min_bar_height: f64,
    pub fallback_width: f64,
    pub fallback_height: f64,
    /// Distance between a bar's top and the baseline of its value label.
    pub value_label_offset: f64,
    /// Distance between the x axis and the baseline of category labels.
    pub category_label_offset: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            left_margin: 40.0,
            right_margin: 10.0,
            top_margin: 30.0,
            bottom_margin: 30.0,
            bar_gap: 12.0,
            tick_count: 4,
            min_bar_width: 4.0,
            min_bar_height: 2.0,
            fallback_width: 320.0,
            fallback_height: 240.0,
            value_label_offset: 6.0,
            category_label_offset: 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub y_line: Line,
    pub x_line: Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Unrounded scale value.
    pub value: f64,
    pub y: f64,
    /// Rounded value for display.
    pub label: String,
}

/// Text anchored at its horizontal center.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value_label: Label,
    pub category_label: Label,
}

#[cfg(test)]
impl BarLayout {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub drawing_width: f64,
    pub drawing_height: f64,
    /// Scale domain maximum, never below 1.
    pub max_prob: f64,
    pub axis: Axis,
    pub ticks: Vec<Tick>,
    pub bars: Vec<BarLayout>,
}

/// Lay out `buckets` with the default geometry.
pub fn layout(buckets: &[Bucket], container_width: f64, container_height: f64) -> ChartLayout {
    ChartGeometry::default().layout(buckets, container_width, container_height)
}

impl ChartGeometry {
    pub fn layout(&self, buckets: &[Bucket], container_width: f64, container_height: f64) -> ChartLayout {
        let canvas_width = usable_extent(container_width, self.fallback_width);
        let canvas_height = usable_extent(container_height, self.fallback_height);

        let drawing_width = (canvas_width - self.left_margin - self.right_margin).max(0.0);
        let drawing_height = (canvas_height - self.top_margin - self.bottom_margin).max(0.0);
        let axis_y = self.top_margin + drawing_height;

        let axis = Axis {
            y_line: Line {
                x1: self.left_margin,
                y1: self.top_margin,
                x2: self.left_margin,
                y2: axis_y,
            },
            x_line: Line {
                x1: self.left_margin,
                y1: axis_y,
                x2: self.left_margin + drawing_width,
                y2: axis_y,
            },
        };

        let max_prob = buckets.iter().map(Bucket::layout_prob).fold(1.0, f64::max);
        let scale = |value: f64| value / max_prob * drawing_height;

        let slots = buckets.len().max(1) as f64;
        let bar_width =
            ((drawing_width - self.bar_gap * (slots + 1.0)) / slots).max(self.min_bar_width);

        let bars = buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| {
                let x = self.left_margin + self.bar_gap + index as f64 * (bar_width + self.bar_gap);
                let height = scale(bucket.layout_prob()).max(self.min_bar_height);
                let y = axis_y - height;
                let center = x + bar_width / 2.0;
                BarLayout {
                    x,
                    y,
                    width: bar_width,
                    height,
                    value_label: Label {
                        text: format_percent(&bucket.prob),
                        x: center,
                        y: y - self.value_label_offset,
                    },
                    category_label: Label {
                        text: display_text(&bucket.range),
                        x: center,
                        y: axis_y + self.category_label_offset,
                    },
                }
            })
            .collect();

        let intervals = self.tick_count.max(1);
        // Whole percents repeat once a tick step drops below 1.
        let label_scale = if max_prob / (intervals as f64) < 1.0 { 10.0 } else { 1.0 };
        let ticks = (0..=intervals)
            .map(|step| {
                let value = max_prob * step as f64 / intervals as f64;
                Tick {
                    value,
                    y: axis_y - scale(value),
                    label: format!("{}%", format_number((value * label_scale).round() / label_scale)),
                }
            })
            .collect();

        ChartLayout {
            canvas_width,
            canvas_height,
            drawing_width,
            drawing_height,
            max_prob,
            axis,
            ticks,
            bars,
        }
    }
}

fn usable_extent(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EPS: f64 = 1e-9;

    fn sample() -> Vec<Bucket> {
        vec![
            Bucket::new("0-2 days", 40.0),
            Bucket::new("3-5 days", 35.0),
            Bucket::new("6+ days", 25.0),
        ]
    }

    fn assert_disjoint(layout: &ChartLayout) {
        for pair in layout.bars.windows(2) {
            assert!(pair[0].right() < pair[1].x, "bars overlap: {pair:?}");
        }
    }

    #[test]
    fn three_bucket_example() {
        let layout = layout(&sample(), 400.0, 300.0);
        assert_eq!(layout.max_prob, 40.0);
        assert_eq!(layout.drawing_width, 350.0);
        assert_eq!(layout.drawing_height, 240.0);
        assert_eq!(layout.bars.len(), 3);

        let heights: Vec<f64> = layout.bars.iter().map(|b| b.height).collect();
        assert!((heights[0] - 240.0).abs() < EPS);
        assert!((heights[1] - 210.0).abs() < EPS);
        assert!((heights[2] - 150.0).abs() < EPS);

        let width = layout.bars[0].width;
        assert!((width - (350.0 - 48.0) / 3.0).abs() < EPS);
        assert!(layout.bars.iter().all(|b| b.width == width));

        let gaps: Vec<f64> = layout
            .bars
            .windows(2)
            .map(|pair| pair[1].x - pair[0].right())
            .collect();
        assert!(gaps.iter().all(|gap| (gap - 12.0).abs() < EPS));

        let values: Vec<&str> = layout.bars.iter().map(|b| b.value_label.text.as_str()).collect();
        assert_eq!(values, ["40%", "35%", "25%"]);
        let categories: Vec<&str> = layout
            .bars
            .iter()
            .map(|b| b.category_label.text.as_str())
            .collect();
        assert_eq!(categories, ["0-2 days", "3-5 days", "6+ days"]);
    }

    #[test]
    fn bars_sit_on_the_axis_with_centered_labels() {
        let layout = layout(&sample(), 400.0, 300.0);
        let axis_y = layout.axis.x_line.y1;
        assert_eq!(axis_y, 270.0);
        for bar in &layout.bars {
            assert!((bar.y + bar.height - axis_y).abs() < EPS);
            assert_eq!(bar.value_label.x, bar.center_x());
            assert_eq!(bar.category_label.x, bar.center_x());
            assert!(bar.value_label.y < bar.y);
            assert!(bar.category_label.y > axis_y);
        }
    }

    #[test]
    fn identical_inputs_give_identical_layouts() {
        let buckets = sample();
        assert_eq!(layout(&buckets, 517.0, 263.0), layout(&buckets, 517.0, 263.0));
    }

    #[test]
    fn bars_never_overlap() {
        for count in [1usize, 2, 5, 12, 40] {
            let buckets: Vec<Bucket> = (0..count)
                .map(|i| Bucket::new(format!("b{i}"), (i * 7 % 100) as f64))
                .collect();
            for (width, height) in [(200.0, 150.0), (640.0, 360.0), (1200.0, 500.0)] {
                let layout = layout(&buckets, width, height);
                assert_eq!(layout.bars.len(), count);
                assert_disjoint(&layout);
            }
        }
    }

    #[test]
    fn crowded_chart_keeps_minimum_width_and_overflows() {
        let buckets: Vec<Bucket> = (0..50).map(|i| Bucket::new(format!("{i}"), 2.0)).collect();
        let layout = layout(&buckets, 300.0, 200.0);
        assert!(layout.bars.iter().all(|b| b.width == 4.0));
        assert_disjoint(&layout);
        let last = layout.bars.last().unwrap();
        assert!(last.right() > layout.axis.x_line.x2);
    }

    #[test]
    fn empty_bucket_list_still_has_axes() {
        let layout = layout(&[], 400.0, 300.0);
        assert!(layout.bars.is_empty());
        assert_eq!(layout.max_prob, 1.0);
        assert_eq!(layout.ticks.len(), 5);
        let Line { x1, y1, x2, y2 } = layout.axis.x_line;
        for v in [x1, y1, x2, y2] {
            assert!(v.is_finite() && v >= 0.0);
        }
    }

    #[test]
    fn all_zero_probabilities_render_slivers() {
        let buckets = vec![Bucket::new("a", 0.0), Bucket::new("b", 0.0)];
        let layout = layout(&buckets, 400.0, 300.0);
        assert_eq!(layout.max_prob, 1.0);
        assert!(layout.bars.iter().all(|b| b.height == 2.0));
    }

    #[test]
    fn equal_probabilities_render_full_height() {
        let buckets = vec![Bucket::new("a", 20.0), Bucket::new("b", 20.0), Bucket::new("c", 20.0)];
        let layout = layout(&buckets, 400.0, 300.0);
        assert!(layout.bars.iter().all(|b| b.height == layout.drawing_height));
    }

    #[test]
    fn height_is_monotonic_in_probability() {
        let buckets = vec![Bucket::new("zero", 0.0), Bucket::new("low", 10.0), Bucket::new("high", 30.0)];
        let layout = layout(&buckets, 400.0, 300.0);
        assert_eq!(layout.bars[0].height, 2.0);
        assert!(layout.bars[1].height < layout.bars[2].height);
    }

    #[test]
    fn invalid_probabilities_scale_as_zero_but_keep_text() {
        let buckets = vec![
            Bucket { range: json!("weird"), prob: json!(250) },
            Bucket { range: json!("text"), prob: json!("n/a") },
            Bucket::new("ok", 10.0),
        ];
        let layout = layout(&buckets, 400.0, 300.0);
        assert_eq!(layout.max_prob, 10.0);
        assert_eq!(layout.bars[0].height, 2.0);
        assert_eq!(layout.bars[0].value_label.text, "250%");
        assert_eq!(layout.bars[1].value_label.text, "—");
        assert_eq!(layout.bars[2].height, layout.drawing_height);
    }

    #[test]
    fn unlaid_out_container_uses_fallback_canvas() {
        for (width, height) in [(0.0, 0.0), (-20.0, 100.0), (f64::NAN, f64::INFINITY)] {
            let layout = layout(&sample(), width, height);
            assert!(layout.canvas_width > 0.0 && layout.canvas_height > 0.0);
        }
        let layout = layout(&sample(), 0.0, -1.0);
        assert_eq!((layout.canvas_width, layout.canvas_height), (320.0, 240.0));
    }

    #[test]
    fn tiny_container_never_goes_negative() {
        let layout = layout(&sample(), 20.0, 10.0);
        assert_eq!(layout.drawing_width, 0.0);
        assert_eq!(layout.drawing_height, 0.0);
        for bar in &layout.bars {
            assert!(bar.width >= 4.0);
            assert!(bar.height >= 2.0);
            assert!(bar.x >= 0.0 && bar.y >= 0.0);
        }
        assert_disjoint(&layout);
    }

    #[test]
    fn ticks_span_zero_to_max() {
        let layout = layout(&sample(), 400.0, 300.0);
        let values: Vec<f64> = layout.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(layout.ticks[0].y, 270.0);
        assert_eq!(layout.ticks[4].y, 30.0);
        assert_eq!(layout.ticks[4].label, "40%");
    }

    #[test]
    fn small_scale_tick_labels_stay_distinct() {
        let zeros = vec![Bucket::new("a", 0.0), Bucket::new("b", 0.0)];
        let layout = layout(&zeros, 400.0, 300.0);
        let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0%", "0.3%", "0.5%", "0.8%", "1%"]);

        let layout = super::layout(&[Bucket::new("a", 3.0)], 400.0, 300.0);
        let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0%", "0.8%", "1.5%", "2.3%", "3%"]);
    }

    #[test]
    fn tick_labels_are_rounded_values_are_not() {
        let layout = layout(&[Bucket::new("a", 35.0)], 400.0, 300.0);
        assert_eq!(layout.ticks[1].value, 8.75);
        assert_eq!(layout.ticks[1].label, "9%");
    }
}
