//! Shared fixtures: an in-memory equipment API that records every call.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use ce_client::{ClientError, ClientResult, EquipmentApi, Endpoints};
use ce_core::{
    EquipmentRecord, SummaryReport, SummaryStats, TypeCount, TypeFilter, Upload, UploadId,
    UploadReceipt,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListUploads,
    Summary(UploadId),
    Equipment(UploadId, TypeFilter),
    UploadCsv(String),
    DownloadReport(UploadId),
}

pub struct FakeApi {
    endpoints: Endpoints,
    calls: Mutex<Vec<Call>>,
    uploads: Mutex<Vec<Upload>>,
    summaries: Mutex<HashMap<UploadId, SummaryReport>>,
    equipment: Mutex<HashMap<UploadId, Vec<EquipmentRecord>>>,
    pub fail_uploads: AtomicBool,
    pub fail_summary: AtomicBool,
    pub reject_csv: AtomicBool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::default(),
            calls: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            summaries: Mutex::new(HashMap::new()),
            equipment: Mutex::new(HashMap::new()),
            fail_uploads: AtomicBool::new(false),
            fail_summary: AtomicBool::new(false),
            reject_csv: AtomicBool::new(false),
        }
    }

    /// Register an upload (prepended, so the newest is first) with its rows.
    pub fn with_upload(self, id: u64, records: Vec<EquipmentRecord>) -> Self {
        self.insert_upload(UploadId::new(id), records);
        self
    }

    fn insert_upload(&self, id: UploadId, records: Vec<EquipmentRecord>) {
        let summary = summarize(&records);
        self.uploads.lock().unwrap().insert(
            0,
            Upload {
                id,
                uploaded_at: format!("2024-01-{:02} 10:00", id.get().min(28)),
                total_equipment: Some(records.len() as u64),
            },
        );
        self.summaries.lock().unwrap().insert(id, summary);
        self.equipment.lock().unwrap().insert(id, records);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn server_error(&self, url: String) -> ClientError {
        ClientError::Status { url, status: 500 }
    }
}

impl EquipmentApi for FakeApi {
    fn list_uploads(&self) -> ClientResult<Vec<Upload>> {
        self.record(Call::ListUploads);
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(self.server_error(self.endpoints.uploads()));
        }
        Ok(self.uploads.lock().unwrap().clone())
    }

    fn summary(&self, upload_id: UploadId) -> ClientResult<SummaryReport> {
        self.record(Call::Summary(upload_id));
        if self.fail_summary.load(Ordering::SeqCst) {
            return Err(self.server_error(self.endpoints.summary(upload_id)));
        }
        self.summaries
            .lock()
            .unwrap()
            .get(&upload_id)
            .cloned()
            .ok_or_else(|| ClientError::Status {
                url: self.endpoints.summary(upload_id),
                status: 404,
            })
    }

    fn filter_equipment(
        &self,
        upload_id: UploadId,
        filter: TypeFilter,
    ) -> ClientResult<Vec<EquipmentRecord>> {
        self.record(Call::Equipment(upload_id, filter));
        let all = self
            .equipment
            .lock()
            .unwrap()
            .get(&upload_id)
            .cloned()
            .unwrap_or_default();
        Ok(all
            .into_iter()
            .filter(|r| {
                filter
                    .query_value()
                    .is_none_or(|kind| r.equipment_type == kind)
            })
            .collect())
    }

    fn upload_csv(&self, file_name: &str, _contents: Vec<u8>) -> ClientResult<UploadReceipt> {
        self.record(Call::UploadCsv(file_name.to_string()));
        if self.reject_csv.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                url: self.endpoints.upload_csv(),
                status: 400,
            });
        }
        let next = self
            .uploads
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.id.get())
            .max()
            .unwrap_or(0)
            + 1;
        let id = UploadId::new(next);
        self.insert_upload(id, vec![record("N1", "Valve", 2.0, 1.0, 280.0)]);
        Ok(UploadReceipt {
            message: Some("CSV uploaded successfully".to_string()),
            upload_id: Some(id),
        })
    }

    fn report_url(&self, upload_id: UploadId) -> String {
        self.endpoints.report(upload_id)
    }

    fn download_report(&self, upload_id: UploadId) -> ClientResult<Vec<u8>> {
        self.record(Call::DownloadReport(upload_id));
        Ok(b"%PDF-1.4".to_vec())
    }
}

pub fn record(name: &str, kind: &str, flow: f64, pressure: f64, temp: f64) -> EquipmentRecord {
    EquipmentRecord {
        equipment_name: name.to_string(),
        equipment_type: kind.to_string(),
        flowrate: flow,
        pressure,
        temperature: temp,
    }
}

pub fn summarize(records: &[EquipmentRecord]) -> SummaryReport {
    let n = records.len().max(1) as f64;
    let mut distribution: Vec<TypeCount> = Vec::new();
    for r in records {
        match distribution
            .iter_mut()
            .find(|t| t.equipment_type == r.equipment_type)
        {
            Some(entry) => entry.count += 1,
            None => distribution.push(TypeCount {
                equipment_type: r.equipment_type.clone(),
                count: 1,
            }),
        }
    }
    SummaryReport {
        summary: SummaryStats {
            total_equipment: records.len() as u64,
            avg_flowrate: records.iter().map(|r| r.flowrate).sum::<f64>() / n,
            avg_pressure: records.iter().map(|r| r.pressure).sum::<f64>() / n,
            avg_temperature: records.iter().map(|r| r.temperature).sum::<f64>() / n,
        },
        type_distribution: distribution,
    }
}

/// Write a small CSV to a fresh temp path and return it.
pub fn temp_csv(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("ce_app_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(
        &path,
        "Equipment Name,Type,Flowrate,Pressure,Temperature\nN1,Valve,2,1,280\n",
    )
    .unwrap();
    path
}
