pub mod chart_view;
pub mod notifications;
pub mod summary_view;
pub mod table_view;
pub mod toolbar;

pub use chart_view::ChartView;
pub use notifications::NotificationsView;
pub use summary_view::SummaryView;
pub use table_view::TableView;
pub use toolbar::ToolbarView;

use ce_app::{DashboardState, NoSelection, SlotStatus, no_selection};

/// Shared loading/failure line shown above a slot's content.
pub(crate) fn slot_status_line(ui: &mut egui::Ui, status: &SlotStatus, what: &str) {
    match status {
        SlotStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading {what}..."));
            });
        }
        SlotStatus::Failed(message) => {
            ui.colored_label(
                egui::Color32::from_rgb(200, 60, 60),
                format!("Could not load {what}: {message}"),
            );
        }
        SlotStatus::Idle | SlotStatus::Ready => {}
    }
}

/// Placeholder for upload-scoped panels. Returns false when an upload is
/// selected and the caller should draw its content.
pub(crate) fn no_selection_line(ui: &mut egui::Ui, state: &DashboardState, what: &str) -> bool {
    let Some(reason) = no_selection(state) else {
        return false;
    };
    match reason {
        NoSelection::Loading => slot_status_line(ui, &SlotStatus::Loading, "uploads"),
        NoSelection::Failed(message) => {
            slot_status_line(ui, &SlotStatus::Failed(message), "uploads")
        }
        NoSelection::Empty => {
            ui.label("No uploads yet. Upload a CSV to get started");
        }
        NoSelection::Choose => {
            ui.label(format!("Select an upload to see its {what}"));
        }
    }
    true
}
