//! Chart-ready series and summary cards derived from fetched data.
//!
//! Everything here is a pure function of already-fetched records.

use ce_core::{ChartKind, EquipmentRecord, SummaryReport, SummaryStats, Upload, format_fixed2};

use crate::dashboard::{DashboardState, SlotStatus};

/// Labelled values, drawn as bars.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub name: &'static str,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Unlabelled `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeries {
    pub name: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Bar(CategorySeries),
    Scatter(PointSeries),
    Line(PointSeries),
}

pub fn type_distribution(report: &SummaryReport) -> CategorySeries {
    CategorySeries {
        name: "Equipment Count",
        labels: report
            .type_distribution
            .iter()
            .map(|t| t.equipment_type.clone())
            .collect(),
        data: report
            .type_distribution
            .iter()
            .map(|t| t.count as f64)
            .collect(),
    }
}

pub fn flow_series(records: &[EquipmentRecord]) -> CategorySeries {
    CategorySeries {
        name: "Flowrate",
        labels: records.iter().map(|r| r.equipment_name.clone()).collect(),
        data: records.iter().map(|r| r.flowrate).collect(),
    }
}

pub fn scatter_series(records: &[EquipmentRecord]) -> PointSeries {
    PointSeries {
        name: "Flowrate vs Pressure",
        x_label: "Flowrate",
        y_label: "Pressure",
        points: records.iter().map(|r| [r.flowrate, r.pressure]).collect(),
    }
}

pub fn temperature_series(records: &[EquipmentRecord]) -> CategorySeries {
    CategorySeries {
        name: "Temperature",
        labels: records.iter().map(|r| r.equipment_name.clone()).collect(),
        data: records.iter().map(|r| r.temperature).collect(),
    }
}

/// Total equipment per upload, oldest first. Uploads without a reported
/// total are skipped.
pub fn trend_series(uploads: &[Upload]) -> PointSeries {
    let mut ordered: Vec<&Upload> = uploads.iter().collect();
    ordered.sort_by_key(|u| (u.uploaded_at_parsed(), u.id));

    PointSeries {
        name: "Total Equipment",
        x_label: "Upload",
        y_label: "Equipment",
        points: ordered
            .into_iter()
            .filter_map(|u| {
                u.total_equipment
                    .map(|total| [u.id.get() as f64, total as f64])
            })
            .collect(),
    }
}

/// Series for `kind`, or `None` when its source data has not arrived.
pub fn chart_data(kind: ChartKind, state: &DashboardState) -> Option<ChartData> {
    match kind {
        ChartKind::Type => state
            .summary()
            .data()
            .map(|report| ChartData::Bar(type_distribution(report))),
        ChartKind::Flow => state
            .equipment()
            .data()
            .map(|records| ChartData::Bar(flow_series(records))),
        ChartKind::Scatter => state
            .equipment()
            .data()
            .map(|records| ChartData::Scatter(scatter_series(records))),
        ChartKind::Temp => state
            .equipment()
            .data()
            .map(|records| ChartData::Bar(temperature_series(records))),
        ChartKind::Trend => state
            .uploads()
            .data()
            .map(|uploads| ChartData::Line(trend_series(uploads))),
    }
}

/// What upload-scoped views show while no upload is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoSelection {
    /// The uploads listing has not arrived yet.
    Loading,
    /// The latest listing request failed.
    Failed(String),
    /// The server has no uploads.
    Empty,
    /// Uploads exist; the user has to pick one.
    Choose,
}

/// `None` while an upload is selected.
pub fn no_selection(state: &DashboardState) -> Option<NoSelection> {
    if state.selection().upload_id.is_some() {
        return None;
    }
    let uploads = state.uploads();
    Some(match uploads.status() {
        SlotStatus::Idle | SlotStatus::Loading => NoSelection::Loading,
        SlotStatus::Failed(message) => NoSelection::Failed(message.clone()),
        SlotStatus::Ready if state.upload_list().is_empty() => NoSelection::Empty,
        SlotStatus::Ready => NoSelection::Choose,
    })
}

/// Equipment table cells. Readings are shown as received, unrounded.
pub fn equipment_row(record: &EquipmentRecord) -> [String; 5] {
    [
        record.equipment_name.clone(),
        record.equipment_type.clone(),
        record.flowrate.to_string(),
        record.pressure.to_string(),
        record.temperature.to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
}

/// The four headline cards. Averages are display-rounded to two decimals;
/// the total is shown verbatim.
pub fn summary_cards(stats: &SummaryStats) -> [SummaryCard; 4] {
    [
        SummaryCard {
            label: "Total Equipment",
            value: stats.total_equipment.to_string(),
        },
        SummaryCard {
            label: "Avg Flowrate",
            value: format_fixed2(stats.avg_flowrate),
        },
        SummaryCard {
            label: "Avg Pressure",
            value: format_fixed2(stats.avg_pressure),
        },
        SummaryCard {
            label: "Avg Temperature",
            value: format_fixed2(stats.avg_temperature),
        },
    ]
}
