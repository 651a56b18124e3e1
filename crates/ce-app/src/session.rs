//! Synchronous driver for the dashboard view-model.
//!
//! Runs every effect inline, in the order it was emitted, until the state
//! settles. Used by the CLI and by tests; the desktop UI runs the same
//! requests on worker threads instead.

use std::collections::VecDeque;

use ce_client::EquipmentApi;

use crate::config::UploadFailurePolicy;
use crate::dashboard::{DashboardState, Effect, Event};
use crate::executor::execute;

pub struct Session<A: EquipmentApi> {
    api: A,
    state: DashboardState,
    opened_reports: Vec<String>,
}

impl<A: EquipmentApi> Session<A> {
    pub fn new(api: A, failure_policy: UploadFailurePolicy) -> Self {
        Self {
            api,
            state: DashboardState::new(failure_policy),
            opened_reports: Vec::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Apply `event` and everything it transitively triggers.
    pub fn dispatch(&mut self, event: Event) -> &DashboardState {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            for effect in self.state.apply(event) {
                match effect {
                    Effect::Fetch(request) => queue.push_back(execute(&self.api, request)),
                    Effect::OpenReport(upload_id) => {
                        self.opened_reports.push(self.api.report_url(upload_id))
                    }
                }
            }
        }

        &self.state
    }

    /// Report URLs exposed since the last call.
    pub fn take_opened_reports(&mut self) -> Vec<String> {
        std::mem::take(&mut self.opened_reports)
    }
}
