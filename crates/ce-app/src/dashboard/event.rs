use std::path::PathBuf;

use ce_core::{
    ChartKind, EquipmentRecord, SummaryReport, TypeFilter, Upload, UploadId, UploadReceipt,
};

/// Remote read or write the view-model wants performed.
///
/// `seq` identifies the request within its slice and must be echoed back in
/// the completion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListUploads {
        seq: u64,
    },
    Summary {
        seq: u64,
        upload_id: UploadId,
    },
    Equipment {
        seq: u64,
        upload_id: UploadId,
        filter: TypeFilter,
    },
    SubmitCsv {
        seq: u64,
        path: PathBuf,
    },
}

impl Request {
    pub fn seq(&self) -> u64 {
        match self {
            Request::ListUploads { seq }
            | Request::Summary { seq, .. }
            | Request::Equipment { seq, .. }
            | Request::SubmitCsv { seq, .. } => *seq,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Request::ListUploads { .. } => "uploads",
            Request::Summary { .. } => "summary",
            Request::Equipment { .. } => "equipment",
            Request::SubmitCsv { .. } => "upload-csv",
        }
    }
}

/// Side effect returned from [`super::DashboardState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(Request),
    /// Expose the report for this upload (open a browser tab, print a URL...).
    OpenReport(UploadId),
}

/// Everything that can change dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // User actions and lifecycle
    Mounted,
    Refresh,
    SelectUpload(Option<UploadId>),
    SetTypeFilter(TypeFilter),
    SetChartKind(ChartKind),
    SetPendingFile(Option<PathBuf>),
    SubmitUpload,
    RequestReport,
    DismissNotification(usize),

    // Completions
    UploadsLoaded {
        seq: u64,
        result: Result<Vec<Upload>, String>,
    },
    SummaryLoaded {
        seq: u64,
        result: Result<SummaryReport, String>,
    },
    EquipmentLoaded {
        seq: u64,
        result: Result<Vec<EquipmentRecord>, String>,
    },
    UploadFinished {
        seq: u64,
        result: Result<UploadReceipt, String>,
    },
}
