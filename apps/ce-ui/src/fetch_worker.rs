use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use ce_app::{Event, Request};
use ce_client::EquipmentApi;

/// Runs dashboard requests off the UI thread.
///
/// Each request gets its own short-lived thread; completions come back as
/// [`Event`]s over a channel that the app drains once per frame.
pub struct FetchWorker {
    api: Arc<dyn EquipmentApi>,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    in_flight: usize,
}

impl FetchWorker {
    pub fn new(api: Arc<dyn EquipmentApi>) -> Self {
        let (tx, rx) = channel();
        Self {
            api,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn start(&mut self, request: Request, ctx: &egui::Context) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let event = ce_app::execute(api.as_ref(), request);
            // The app may already be gone; nothing to report to then.
            let _ = tx.send(event);
            ctx.request_repaint();
        });
        self.in_flight += 1;
    }

    /// Completions received since the last call, in arrival order.
    pub fn drain(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            events.push(event);
        }
        events
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
