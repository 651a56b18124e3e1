use ce_app::{DashboardState, Event};
use ce_core::{ChartKind, TypeFilter, UploadId};
use egui_file_dialog::FileDialog;

#[derive(Default)]
pub struct ToolbarView;

impl ToolbarView {
    /// Draw the control row and return the events it produced this frame.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &DashboardState,
        file_dialog: &mut FileDialog,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        let selection = state.selection();

        ui.horizontal_wrapped(|ui| {
            let mut filter = selection.type_filter;
            egui::ComboBox::from_id_salt("type_filter")
                .selected_text(filter.label())
                .show_ui(ui, |ui| {
                    for option in TypeFilter::ALL {
                        ui.selectable_value(&mut filter, option, option.label());
                    }
                });
            if filter != selection.type_filter {
                events.push(Event::SetTypeFilter(filter));
            }

            let mut upload: Option<UploadId> = selection.upload_id;
            let selected_text = upload
                .and_then(|id| state.upload_list().iter().find(|u| u.id == id))
                .map(|u| u.label())
                .unwrap_or_else(|| "Select Upload".to_string());
            egui::ComboBox::from_id_salt("upload_picker")
                .width(260.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut upload, None, "Select Upload");
                    for item in state.upload_list() {
                        ui.selectable_value(&mut upload, Some(item.id), item.label());
                    }
                });
            if upload != selection.upload_id {
                events.push(Event::SelectUpload(upload));
            }

            let mut kind = selection.chart_kind;
            egui::ComboBox::from_id_salt("chart_kind")
                .selected_text(kind.title())
                .show_ui(ui, |ui| {
                    for option in ChartKind::ALL {
                        ui.selectable_value(&mut kind, option, option.title());
                    }
                });
            if kind != selection.chart_kind {
                events.push(Event::SetChartKind(kind));
            }

            if ui
                .add_enabled(
                    state.can_request_report(),
                    egui::Button::new("Download Report"),
                )
                .clicked()
            {
                events.push(Event::RequestReport);
            }

            ui.separator();

            if ui.button("Choose CSV...").clicked() {
                file_dialog.select_file();
            }
            match &selection.pending_file {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name).on_hover_text(path.display().to_string());
                    if ui.small_button("x").on_hover_text("Clear").clicked() {
                        events.push(Event::SetPendingFile(None));
                    }
                }
                None => {
                    ui.weak("No file chosen");
                }
            }

            let uploading = selection.is_uploading;
            let label = if uploading { "Uploading..." } else { "Upload CSV" };
            if ui
                .add_enabled(!uploading, egui::Button::new(label))
                .clicked()
            {
                events.push(Event::SubmitUpload);
            }
            if uploading {
                ui.spinner();
            }

            ui.separator();

            if ui
                .add_enabled(!state.uploads().is_loading(), egui::Button::new("Refresh"))
                .clicked()
            {
                events.push(Event::Refresh);
            }
        });

        events
    }
}
