use ce_app::{DashboardState, summary_cards};

use super::{no_selection_line, slot_status_line};

const CARD_COLORS: [egui::Color32; 4] = [
    egui::Color32::from_rgb(0x4e, 0x73, 0xdf),
    egui::Color32::from_rgb(0x1c, 0xc8, 0x8a),
    egui::Color32::from_rgb(0x36, 0xb9, 0xcc),
    egui::Color32::from_rgb(0xe7, 0x4a, 0x3b),
];

#[derive(Default)]
pub struct SummaryView;

impl SummaryView {
    pub fn show(&mut self, ui: &mut egui::Ui, state: &DashboardState) {
        if no_selection_line(ui, state, "summary") {
            return;
        }

        let summary = state.summary();
        slot_status_line(ui, summary.status(), "summary");

        let Some(report) = summary.data() else {
            return;
        };

        ui.horizontal(|ui| {
            for (card, color) in summary_cards(&report.summary).iter().zip(CARD_COLORS) {
                egui::Frame::none()
                    .fill(color)
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                    .show(ui, |ui| {
                        ui.set_min_width(140.0);
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(card.label)
                                    .color(egui::Color32::WHITE)
                                    .small(),
                            );
                            ui.label(
                                egui::RichText::new(&card.value)
                                    .color(egui::Color32::WHITE)
                                    .size(22.0)
                                    .strong(),
                            );
                        });
                    });
            }
        });
    }
}
