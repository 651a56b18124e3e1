//! Remote operations the dashboard depends on.

use std::path::Path;

use ce_core::{EquipmentRecord, SummaryReport, TypeFilter, Upload, UploadId, UploadReceipt};

use crate::{ClientError, ClientResult};

/// Contract of the equipment API server.
///
/// Implementations are shared across worker threads, hence `Send + Sync`.
pub trait EquipmentApi: Send + Sync {
    /// `GET /uploads/`, most recent first.
    fn list_uploads(&self) -> ClientResult<Vec<Upload>>;

    /// `GET /summary/?upload_id=<id>`.
    fn summary(&self, upload_id: UploadId) -> ClientResult<SummaryReport>;

    /// `GET /filter-equipment/?upload_id=<id>[&type=<kind>]`.
    fn filter_equipment(
        &self,
        upload_id: UploadId,
        filter: TypeFilter,
    ) -> ClientResult<Vec<EquipmentRecord>>;

    /// `POST /upload-csv/` with the bytes in multipart field `file`.
    fn upload_csv(&self, file_name: &str, contents: Vec<u8>) -> ClientResult<UploadReceipt>;

    /// Location of the downloadable report for one upload.
    fn report_url(&self, upload_id: UploadId) -> String;

    /// Fetch the raw report bytes. The content is never interpreted.
    fn download_report(&self, upload_id: UploadId) -> ClientResult<Vec<u8>>;

    /// Read a CSV from disk and submit it.
    fn upload_csv_file(&self, path: &Path) -> ClientResult<UploadReceipt> {
        let contents = std::fs::read(path).map_err(|source| ClientError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.csv")
            .to_string();
        self.upload_csv(&file_name, contents)
    }
}
