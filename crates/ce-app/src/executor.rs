//! Performs a [`Request`] against an [`EquipmentApi`] and turns the outcome
//! into the completion [`Event`] the reducer expects.

use ce_client::EquipmentApi;

use crate::dashboard::{Event, Request};

/// Execute one request synchronously. Errors are flattened to messages; the
/// reducer decides how they surface.
pub fn execute<A: EquipmentApi + ?Sized>(api: &A, request: Request) -> Event {
    let name = request.name();
    let seq = request.seq();
    tracing::debug!(request = name, seq, "executing");

    let event = match request {
        Request::ListUploads { seq } => Event::UploadsLoaded {
            seq,
            result: api.list_uploads().map_err(|e| e.to_string()),
        },
        Request::Summary { seq, upload_id } => Event::SummaryLoaded {
            seq,
            result: api.summary(upload_id).map_err(|e| e.to_string()),
        },
        Request::Equipment {
            seq,
            upload_id,
            filter,
        } => Event::EquipmentLoaded {
            seq,
            result: api
                .filter_equipment(upload_id, filter)
                .map_err(|e| e.to_string()),
        },
        Request::SubmitCsv { seq, path } => Event::UploadFinished {
            seq,
            result: api.upload_csv_file(&path).map_err(|e| e.to_string()),
        },
    };

    if let Some(message) = failure_message(&event) {
        tracing::warn!(request = name, seq, %message, "request failed");
    }
    event
}

fn failure_message(event: &Event) -> Option<&str> {
    match event {
        Event::UploadsLoaded { result: Err(m), .. }
        | Event::SummaryLoaded { result: Err(m), .. }
        | Event::EquipmentLoaded { result: Err(m), .. }
        | Event::UploadFinished { result: Err(m), .. } => Some(m),
        _ => None,
    }
}
