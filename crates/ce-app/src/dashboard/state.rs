use std::path::PathBuf;

use ce_core::{ChartKind, EquipmentRecord, SummaryReport, TypeFilter, Upload, UploadId};

use super::event::{Effect, Event, Request};
use super::notify::{Level, MAX_NOTIFICATIONS, Notification};
use super::slot::{Completion, Slot};
use crate::config::UploadFailurePolicy;

/// User-controlled selection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub upload_id: Option<UploadId>,
    pub type_filter: TypeFilter,
    pub chart_kind: ChartKind,
    pub pending_file: Option<PathBuf>,
    pub is_uploading: bool,
}

/// Single state container for the dashboard screen.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    uploads: Slot<Vec<Upload>>,
    summary: Slot<SummaryReport>,
    equipment: Slot<Vec<EquipmentRecord>>,
    selection: Selection,
    notifications: Vec<Notification>,
    upload_seq: u64,
    failure_policy: UploadFailurePolicy,
}

impl DashboardState {
    pub fn new(failure_policy: UploadFailurePolicy) -> Self {
        Self {
            failure_policy,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> &Slot<Vec<Upload>> {
        &self.uploads
    }

    pub fn summary(&self) -> &Slot<SummaryReport> {
        &self.summary
    }

    pub fn equipment(&self) -> &Slot<Vec<EquipmentRecord>> {
        &self.equipment
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Uploads currently known, empty until the first listing arrives.
    pub fn upload_list(&self) -> &[Upload] {
        self.uploads.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn equipment_list(&self) -> &[EquipmentRecord] {
        self.equipment.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Report download is only offered once an upload is selected.
    pub fn can_request_report(&self) -> bool {
        self.selection.upload_id.is_some()
    }

    /// True while any request issued by this state is outstanding.
    pub fn is_busy(&self) -> bool {
        self.selection.is_uploading
            || self.uploads.is_loading()
            || self.summary.is_loading()
            || self.equipment.is_loading()
    }

    /// Apply one event and return the effects it requires.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            Event::Mounted => self.reload_uploads(&mut effects),
            Event::Refresh => {
                self.reload_uploads(&mut effects);
                if let Some(upload_id) = self.selection.upload_id {
                    let seq = self.summary.begin();
                    effects.push(Effect::Fetch(Request::Summary { seq, upload_id }));
                    let seq = self.equipment.begin();
                    effects.push(Effect::Fetch(Request::Equipment {
                        seq,
                        upload_id,
                        filter: self.selection.type_filter,
                    }));
                }
            }
            Event::SelectUpload(upload_id) => self.select_upload(upload_id, &mut effects),
            Event::SetTypeFilter(filter) => self.set_type_filter(filter, &mut effects),
            Event::SetChartKind(kind) => self.selection.chart_kind = kind,
            Event::SetPendingFile(path) => self.selection.pending_file = path,
            Event::SubmitUpload => self.submit_upload(&mut effects),
            Event::RequestReport => match self.selection.upload_id {
                Some(upload_id) => effects.push(Effect::OpenReport(upload_id)),
                None => self.notify(Level::Warning, "Select an upload to download its report"),
            },
            Event::DismissNotification(index) => {
                if index < self.notifications.len() {
                    self.notifications.remove(index);
                }
            }
            Event::UploadsLoaded { seq, result } => match self.uploads.accept(seq, result) {
                Completion::Applied => self.ensure_valid_selection(&mut effects),
                Completion::Failed(message) => {
                    self.notify(Level::Error, format!("Failed to load uploads: {message}"))
                }
                Completion::Stale => tracing::debug!(seq, "discarding stale uploads response"),
            },
            Event::SummaryLoaded { seq, result } => match self.summary.accept(seq, result) {
                Completion::Applied => {}
                Completion::Failed(message) => {
                    self.notify(Level::Error, format!("Failed to load summary: {message}"))
                }
                Completion::Stale => tracing::debug!(seq, "discarding stale summary response"),
            },
            Event::EquipmentLoaded { seq, result } => match self.equipment.accept(seq, result) {
                Completion::Applied => {}
                Completion::Failed(message) => {
                    self.notify(Level::Error, format!("Failed to load equipment: {message}"))
                }
                Completion::Stale => tracing::debug!(seq, "discarding stale equipment response"),
            },
            Event::UploadFinished { seq, result } => {
                self.finish_upload(seq, result.map(|_| ()), &mut effects)
            }
        }

        effects
    }

    fn reload_uploads(&mut self, effects: &mut Vec<Effect>) {
        let seq = self.uploads.begin();
        effects.push(Effect::Fetch(Request::ListUploads { seq }));
    }

    fn select_upload(&mut self, upload_id: Option<UploadId>, effects: &mut Vec<Effect>) {
        if upload_id == self.selection.upload_id {
            return;
        }
        if let Some(id) = upload_id {
            if !self.upload_list().iter().any(|u| u.id == id) {
                self.notify(Level::Warning, format!("Upload {id} is not available"));
                return;
            }
        }
        self.set_selected(upload_id, effects);
    }

    /// Switch uploads and refetch everything scoped to the new one.
    fn set_selected(&mut self, upload_id: Option<UploadId>, effects: &mut Vec<Effect>) {
        tracing::debug!(?upload_id, "upload selected");
        self.selection.upload_id = upload_id;

        match upload_id {
            Some(upload_id) => {
                let seq = self.summary.restart();
                effects.push(Effect::Fetch(Request::Summary { seq, upload_id }));
                let seq = self.equipment.restart();
                effects.push(Effect::Fetch(Request::Equipment {
                    seq,
                    upload_id,
                    filter: self.selection.type_filter,
                }));
            }
            None => {
                self.summary.clear();
                self.equipment.clear();
            }
        }
    }

    fn set_type_filter(&mut self, filter: TypeFilter, effects: &mut Vec<Effect>) {
        if filter == self.selection.type_filter {
            return;
        }
        self.selection.type_filter = filter;

        // Summary is scoped to the upload only.
        if let Some(upload_id) = self.selection.upload_id {
            let seq = self.equipment.restart();
            effects.push(Effect::Fetch(Request::Equipment {
                seq,
                upload_id,
                filter,
            }));
        }
    }

    /// After a new listing, keep the selection if it still exists, otherwise
    /// fall back to the newest upload.
    fn ensure_valid_selection(&mut self, effects: &mut Vec<Effect>) {
        let list = self.upload_list();
        let still_listed = self
            .selection
            .upload_id
            .is_some_and(|id| list.iter().any(|u| u.id == id));
        if still_listed {
            return;
        }

        let newest = list.first().map(|u| u.id);
        if newest != self.selection.upload_id {
            self.set_selected(newest, effects);
        }
    }

    fn submit_upload(&mut self, effects: &mut Vec<Effect>) {
        if self.selection.is_uploading {
            self.notify(Level::Warning, "An upload is already in progress");
            return;
        }
        let Some(path) = self.selection.pending_file.clone() else {
            self.notify(Level::Warning, "Please select a CSV file first");
            return;
        };

        self.selection.is_uploading = true;
        self.upload_seq += 1;
        effects.push(Effect::Fetch(Request::SubmitCsv {
            seq: self.upload_seq,
            path,
        }));
    }

    fn finish_upload(&mut self, seq: u64, result: Result<(), String>, effects: &mut Vec<Effect>) {
        if seq != self.upload_seq || !self.selection.is_uploading {
            tracing::debug!(seq, "discarding stale upload completion");
            return;
        }
        self.selection.is_uploading = false;
        self.selection.pending_file = None;

        let reset = match result {
            Ok(()) => {
                self.notify(Level::Success, "CSV uploaded successfully");
                true
            }
            Err(message) => {
                self.notify(Level::Error, format!("CSV upload failed: {message}"));
                self.failure_policy == UploadFailurePolicy::ResetAndReload
            }
        };

        if reset {
            self.selection.upload_id = None;
            self.summary.clear();
            self.equipment.clear();
            self.reload_uploads(effects);
        }
    }

    fn notify(&mut self, level: Level, message: impl Into<String>) {
        let notification = Notification::new(level, message);
        match level {
            Level::Error | Level::Warning => tracing::warn!(message = %notification.message),
            Level::Success => tracing::info!(message = %notification.message),
        }
        self.notifications.push(notification);
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }
}
