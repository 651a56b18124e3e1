//! URL layout of the equipment API.

use ce_core::{TypeFilter, UploadId};

/// Builds request URLs relative to an API base such as
/// `http://127.0.0.1:8000/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }
}

impl Endpoints {
    pub const DEFAULT_BASE: &'static str = "http://127.0.0.1:8000/api";

    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn uploads(&self) -> String {
        format!("{}/uploads/", self.base)
    }

    pub fn summary(&self, upload_id: UploadId) -> String {
        format!("{}/summary/?upload_id={}", self.base, upload_id)
    }

    pub fn filter_equipment(&self, upload_id: UploadId, filter: TypeFilter) -> String {
        let mut url = format!("{}/filter-equipment/?upload_id={}", self.base, upload_id);
        if let Some(kind) = filter.query_value() {
            url.push_str("&type=");
            url.push_str(kind);
        }
        url
    }

    pub fn upload_csv(&self) -> String {
        format!("{}/upload-csv/", self.base)
    }

    pub fn report(&self, upload_id: UploadId) -> String {
        format!("{}/report/?upload_id={}", self.base, upload_id)
    }
}

/// File name the server suggests for a downloaded report.
pub fn report_file_name(upload_id: UploadId) -> String {
    format!("report_upload_{}.pdf", upload_id)
}
