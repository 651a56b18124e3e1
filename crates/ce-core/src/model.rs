//! Wire records returned by the equipment API.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::UploadId;

/// One ingested CSV file as listed by `GET /uploads/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub id: UploadId,
    pub uploaded_at: String,
    /// Row count reported alongside the listing; older servers omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_equipment: Option<u64>,
}

impl Upload {
    /// Label used by upload pickers: `Upload 7 - 2024-01-01 10:00`.
    pub fn label(&self) -> String {
        format!("Upload {} - {}", self.id, self.uploaded_at)
    }

    /// Best-effort parse of `uploaded_at`.
    ///
    /// Accepts the listing format (`%Y-%m-%d %H:%M`), RFC 3339 and bare dates.
    pub fn uploaded_at_parsed(&self) -> Option<NaiveDateTime> {
        let raw = self.uploaded_at.trim();
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
            return Some(ts);
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(ts);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.naive_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

/// Aggregates for one upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_equipment: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
}

/// Count of records of one equipment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub equipment_type: String,
    pub count: u64,
}

/// Response of `GET /summary/?upload_id=<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub summary: SummaryStats,
    #[serde(default)]
    pub type_distribution: Vec<TypeCount>,
}

/// One parsed CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub equipment_name: String,
    pub equipment_type: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

/// Acknowledgement of `POST /upload-csv/`.
///
/// The server body is not part of the contract; both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub upload_id: Option<UploadId>,
}
