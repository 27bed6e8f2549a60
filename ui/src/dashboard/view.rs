use dioxus::prelude::*;

use super::{regions, Frame, Region, Renderer};
use crate::{
    chart::BucketChart,
    core::{config::DashboardConfig, source::ConfiguredSource},
    t,
    tables::{BucketRow, DayRow},
};

/// Whole dashboard page. Runs one refresh cycle when first mounted.
///
/// Expects a [`DashboardConfig`] in context (provided by the launcher).
#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<DashboardConfig>();
    let frame = use_signal(Frame::loading);

    use_future(move || {
        let renderer = Renderer::new(ConfiguredSource::from(&config));
        let mut surface = frame;
        async move {
            renderer.refresh(&mut surface).await;
        }
    });

    let current = frame();
    let title = t!("dashboard-title");

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard__header",
                h1 { "{title}" }
                p { id: regions::SUBTITLE, class: "dashboard__subtitle", "{region_text(&current.subtitle)}" }
            }

            div { class: "dashboard__kpis",
                KpiCard { id: regions::MEDIAN, label: t!("kpi-median"), value: current.median.clone() }
                KpiCard { id: regions::MEAN, label: t!("kpi-mean"), value: current.mean.clone() }
                KpiCard { id: regions::WITHIN_WEEK, label: t!("kpi-within-week"), value: current.within_week.clone() }
            }

            div { class: "dashboard__panels",
                BucketTable { rows: current.buckets.clone() }
                DailyTable { rows: current.daily.clone() }
            }

            section { class: "dashboard-card dashboard__chart",
                div { class: "dashboard-card__header",
                    h2 { {t!("chart-heading")} }
                }
                div { id: regions::CHART,
                    match current.chart.clone() {
                        Region::Ready(buckets) => rsx! { BucketChart { buckets } },
                        other => rsx! { p { class: "dashboard-card__placeholder", "{state_text(&other)}" } },
                    }
                }
            }
        }
    }
}

#[component]
fn KpiCard(id: &'static str, label: String, value: Region<String>) -> Element {
    rsx! {
        div { class: "dashboard-kpi",
            span { class: "dashboard-kpi__label", "{label}" }
            strong { id: "{id}", class: "dashboard-kpi__value", "{region_text(&value)}" }
        }
    }
}

#[component]
fn BucketTable(rows: Region<Vec<BucketRow>>) -> Element {
    let heading = t!("buckets-heading");
    let col_range = t!("buckets-col-range");
    let col_scenario = t!("buckets-col-scenario");
    let col_probability = t!("buckets-col-probability");

    rsx! {
        section { class: "dashboard-card dashboard__buckets",
            div { class: "dashboard-card__header",
                h2 { "{heading}" }
            }
            table { class: "dashboard-table",
                thead {
                    tr {
                        th { "{col_range}" }
                        th { "{col_scenario}" }
                        th { "{col_probability}" }
                    }
                }
                tbody { id: regions::BUCKET_ROWS,
                    match rows {
                        Region::Ready(rows) => rsx! {
                            for row in rows.into_iter() {
                                {render_bucket_row(row)}
                            }
                        },
                        other => rsx! { {state_row(&other, 3)} },
                    }
                }
            }
        }
    }
}

fn render_bucket_row(row: BucketRow) -> Element {
    let fill = format!("width: {}%", row.fill_width_percent);
    rsx! {
        tr {
            td { "{row.range_label}" }
            td { "#{row.scenario_ordinal}" }
            td { class: "dashboard-table__prob",
                span { class: "dashboard-table__bar",
                    span { class: "dashboard-table__fill", style: "{fill}" }
                }
                span { "{row.percent_text}" }
            }
        }
    }
}

#[component]
fn DailyTable(rows: Region<Vec<DayRow>>) -> Element {
    let heading = t!("daily-heading");
    let col_day = t!("daily-col-day");
    let col_date = t!("daily-col-date");
    let col_end = t!("daily-col-end-today");
    let col_continues = t!("daily-col-continues");
    let col_watch = t!("daily-col-watch");

    rsx! {
        section { class: "dashboard-card dashboard__daily",
            div { class: "dashboard-card__header",
                h2 { "{heading}" }
            }
            table { class: "dashboard-table",
                thead {
                    tr {
                        th { "{col_day}" }
                        th { "{col_date}" }
                        th { "{col_end}" }
                        th { "{col_continues}" }
                        th { "{col_watch}" }
                    }
                }
                tbody { id: regions::DAILY_ROWS,
                    match rows {
                        Region::Ready(rows) => rsx! {
                            for row in rows.into_iter() {
                                tr {
                                    td { "{row.day}" }
                                    td { "{row.date}" }
                                    td { "{row.end_today}" }
                                    td { "{row.shutdown_continues}" }
                                    td { "{row.watch}" }
                                }
                            }
                        },
                        other => rsx! { {state_row(&other, 5)} },
                    }
                }
            }
        }
    }
}

fn state_row<T>(region: &Region<T>, columns: usize) -> Element {
    let colspan = columns.to_string();
    rsx! {
        tr { class: "dashboard-table__state",
            td { colspan: "{colspan}", "{state_text(region)}" }
        }
    }
}

fn region_text(region: &Region<String>) -> String {
    match region {
        Region::Ready(text) => text.clone(),
        other => state_text(other),
    }
}

fn state_text<T>(region: &Region<T>) -> String {
    match region {
        Region::Loading => t!("state-loading"),
        _ => t!("state-unavailable"),
    }
}
