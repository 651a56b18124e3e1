//! Blocking HTTP implementation of [`EquipmentApi`].

use std::time::Duration;

use ce_core::{EquipmentRecord, SummaryReport, TypeFilter, Upload, UploadId, UploadReceipt};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult, Endpoints, EquipmentApi};

const USER_AGENT: &str = concat!("ce-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    endpoints: Endpoints,
}

impl HttpClient {
    /// Build a client for `base_url`. `timeout` of `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        // The blocking builder defaults to 30s; `None` must clear it.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(base_url),
        })
    }

    fn get(&self, url: &str) -> ClientResult<Response> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;
        check_status(url, response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let response = self.get(url)?;
        response.json::<T>().map_err(|e| ClientError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

fn check_status(url: &str, response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(%url, status = status.as_u16(), "request rejected");
        Err(ClientError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

impl EquipmentApi for HttpClient {
    fn list_uploads(&self) -> ClientResult<Vec<Upload>> {
        self.get_json(&self.endpoints.uploads())
    }

    fn summary(&self, upload_id: UploadId) -> ClientResult<SummaryReport> {
        self.get_json(&self.endpoints.summary(upload_id))
    }

    fn filter_equipment(
        &self,
        upload_id: UploadId,
        filter: TypeFilter,
    ) -> ClientResult<Vec<EquipmentRecord>> {
        self.get_json(&self.endpoints.filter_equipment(upload_id, filter))
    }

    fn upload_csv(&self, file_name: &str, contents: Vec<u8>) -> ClientResult<UploadReceipt> {
        let url = self.endpoints.upload_csv();
        tracing::debug!(%url, file_name, bytes = contents.len(), "POST");

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        let response = check_status(&url, response)?;

        // Only the status is part of the contract; the body is decoded if it can be.
        let body = response.text().unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    fn report_url(&self, upload_id: UploadId) -> String {
        self.endpoints.report(upload_id)
    }

    fn download_report(&self, upload_id: UploadId) -> ClientResult<Vec<u8>> {
        let url = self.endpoints.report(upload_id);
        let response = self.get(&url)?;
        let bytes = response.bytes().map_err(|source| ClientError::Transport {
            url: url.clone(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}
