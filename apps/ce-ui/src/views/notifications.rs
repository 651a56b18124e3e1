use ce_app::{DashboardState, Event, Level};

#[derive(Default)]
pub struct NotificationsView;

impl NotificationsView {
    pub fn show(&mut self, ui: &mut egui::Ui, state: &DashboardState) -> Vec<Event> {
        let mut events = Vec::new();

        for (index, notification) in state.notifications().iter().enumerate().rev() {
            ui.horizontal(|ui| {
                let color = match notification.level {
                    Level::Success => egui::Color32::from_rgb(0x1c, 0xc8, 0x8a),
                    Level::Warning => egui::Color32::from_rgb(0xf6, 0xc2, 0x3e),
                    Level::Error => egui::Color32::from_rgb(0xe7, 0x4a, 0x3b),
                };
                ui.colored_label(color, "●");
                ui.label(&notification.message);
                if ui.small_button("Dismiss").clicked() {
                    events.push(Event::DismissNotification(index));
                }
            });
        }

        events
    }
}
