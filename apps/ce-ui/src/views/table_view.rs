use ce_app::{DashboardState, equipment_row};
use egui_extras::{Column, TableBuilder};

use super::slot_status_line;

#[derive(Default)]
pub struct TableView;

impl TableView {
    pub fn show(&mut self, ui: &mut egui::Ui, state: &DashboardState) {
        if state.selection().upload_id.is_none() {
            return;
        }

        ui.heading("Equipment");
        slot_status_line(ui, state.equipment().status(), "equipment");

        let records = state.equipment_list();
        if records.is_empty() {
            if state.equipment().data().is_some() {
                ui.label("No equipment matches the current filter");
            }
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(160.0).at_least(100.0))
            .column(Column::initial(100.0).at_least(70.0))
            .column(Column::initial(100.0).at_least(70.0))
            .column(Column::initial(100.0).at_least(70.0))
            .column(Column::remainder().at_least(90.0))
            .header(22.0, |mut header| {
                for title in ["Name", "Type", "Flowrate", "Pressure", "Temperature"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, records.len(), |mut row| {
                    for cell in equipment_row(&records[row.index()]) {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    }
}
