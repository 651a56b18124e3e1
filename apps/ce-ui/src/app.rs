use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ce_app::{DashboardState, Effect, Event, UploadFailurePolicy};
use ce_client::EquipmentApi;
use egui_file_dialog::FileDialog;

use crate::fetch_worker::FetchWorker;
use crate::views::{ChartView, NotificationsView, SummaryView, TableView, ToolbarView};

pub struct DashboardApp {
    state: DashboardState,
    api: Arc<dyn EquipmentApi>,
    worker: FetchWorker,
    file_dialog: FileDialog,
    toolbar: ToolbarView,
    summary_view: SummaryView,
    chart_view: ChartView,
    table_view: TableView,
    notifications_view: NotificationsView,
    mounted: bool,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        api: Arc<dyn EquipmentApi>,
        failure_policy: UploadFailurePolicy,
    ) -> Self {
        let file_dialog = FileDialog::new()
            .add_file_filter(
                "CSV files",
                Arc::new(|p: &Path| {
                    p.extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
                }),
            )
            .default_file_filter("CSV files");

        Self {
            state: DashboardState::new(failure_policy),
            worker: FetchWorker::new(Arc::clone(&api)),
            api,
            file_dialog,
            toolbar: ToolbarView::default(),
            summary_view: SummaryView::default(),
            chart_view: ChartView::default(),
            table_view: TableView::default(),
            notifications_view: NotificationsView::default(),
            mounted: false,
        }
    }

    /// Feed one event through the reducer and carry out its effects.
    fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        for effect in self.state.apply(event) {
            match effect {
                Effect::Fetch(request) => self.worker.start(request, ctx),
                Effect::OpenReport(upload_id) => {
                    let url = self.api.report_url(upload_id);
                    tracing::info!(%url, "opening report");
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.mounted {
            self.mounted = true;
            self.dispatch(ctx, Event::Mounted);
        }

        for event in self.worker.drain() {
            self.dispatch(ctx, event);
        }

        let mut events = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| ui.heading("Chemical Equipment Dashboard"));
            ui.add_space(4.0);
            events.extend(self.toolbar.show(ui, &self.state, &mut self.file_dialog));
            ui.add_space(4.0);
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            events.push(Event::SetPendingFile(Some(path.to_path_buf())));
        }

        if !self.state.notifications().is_empty() {
            egui::TopBottomPanel::bottom("notifications").show(ctx, |ui| {
                events.extend(self.notifications_view.show(ui, &self.state));
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.summary_view.show(ui, &self.state);
            ui.separator();
            self.chart_view.show(ui, &self.state);
            ui.separator();
            self.table_view.show(ui, &self.state);
        });

        for event in events {
            self.dispatch(ctx, event);
        }

        if self.state.is_busy() || self.worker.in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
