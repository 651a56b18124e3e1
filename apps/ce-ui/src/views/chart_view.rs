use ce_app::series::{CategorySeries, PointSeries};
use ce_app::{ChartData, DashboardState, SlotStatus, chart_data};
use ce_core::ChartKind;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use super::{no_selection_line, slot_status_line};

const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4e, 0x73, 0xdf);

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn show(&mut self, ui: &mut egui::Ui, state: &DashboardState) {
        let kind = state.selection().chart_kind;
        ui.heading(kind.title());

        let (status, what) = source_status(kind, state);
        if kind != ChartKind::Trend && no_selection_line(ui, state, "charts") {
            return;
        }
        slot_status_line(ui, status, what);

        let Some(data) = chart_data(kind, state) else {
            return;
        };

        let height = (ui.available_height() * 0.5).max(220.0);
        match data {
            ChartData::Bar(series) => show_bars(ui, kind, &series, height),
            ChartData::Scatter(series) => show_points(ui, kind, &series, height, false),
            ChartData::Line(series) => show_points(ui, kind, &series, height, true),
        }
    }
}

fn source_status(kind: ChartKind, state: &DashboardState) -> (&SlotStatus, &'static str) {
    match kind {
        ChartKind::Type => (state.summary().status(), "summary"),
        ChartKind::Flow | ChartKind::Scatter | ChartKind::Temp => {
            (state.equipment().status(), "equipment")
        }
        ChartKind::Trend => (state.uploads().status(), "uploads"),
    }
}

fn show_bars(ui: &mut egui::Ui, kind: ChartKind, series: &CategorySeries, height: f32) {
    if series.data.is_empty() {
        ui.label("No data");
        return;
    }

    let bars: Vec<Bar> = series
        .data
        .iter()
        .zip(&series.labels)
        .enumerate()
        .map(|(i, (value, label))| Bar::new(i as f64, *value).name(label).width(0.6))
        .collect();
    let labels = series.labels.clone();

    Plot::new(("chart", kind.key()))
        .height(height)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(series.name).color(BAR_COLOR));
        });
}

fn show_points(
    ui: &mut egui::Ui,
    kind: ChartKind,
    series: &PointSeries,
    height: f32,
    connect: bool,
) {
    if series.points.is_empty() {
        ui.label("No data");
        return;
    }

    Plot::new(("chart", kind.key()))
        .height(height)
        .legend(Legend::default())
        .x_axis_label(series.x_label)
        .y_axis_label(series.y_label)
        .show(ui, |plot_ui| {
            let points = PlotPoints::from(series.points.clone());
            if connect {
                plot_ui.line(Line::new(points).name(series.name).color(BAR_COLOR));
                plot_ui.points(
                    Points::new(series.points.clone())
                        .radius(3.0)
                        .color(BAR_COLOR),
                );
            } else {
                plot_ui.points(
                    Points::new(points)
                        .name(series.name)
                        .radius(4.0)
                        .color(egui::Color32::from_rgb(0xe7, 0x4a, 0x3b)),
                );
            }
        });
}
