//! Transition properties of the dashboard reducer, driven by hand so every
//! emitted effect and every completion ordering is explicit.

mod support;

use std::path::PathBuf;

use ce_app::{
    DashboardState, Effect, Event, Level, NoSelection, Request, SlotStatus, UploadFailurePolicy,
    no_selection,
};
use ce_core::{ChartKind, TypeFilter, Upload, UploadId, UploadReceipt};
use support::{record, summarize};

fn upload(id: u64) -> Upload {
    Upload {
        id: UploadId::new(id),
        uploaded_at: "2024-01-01".to_string(),
        total_equipment: None,
    }
}

fn fetches(effects: &[Effect]) -> Vec<&Request> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Fetch(r) => Some(r),
            Effect::OpenReport(_) => None,
        })
        .collect()
}

fn list_seq(effects: &[Effect]) -> u64 {
    fetches(effects)
        .into_iter()
        .find_map(|r| match r {
            Request::ListUploads { seq } => Some(*seq),
            _ => None,
        })
        .expect("uploads list request")
}

fn summary_req(effects: &[Effect]) -> Option<(u64, UploadId)> {
    fetches(effects).into_iter().find_map(|r| match r {
        Request::Summary { seq, upload_id } => Some((*seq, *upload_id)),
        _ => None,
    })
}

fn equipment_req(effects: &[Effect]) -> Option<(u64, UploadId, TypeFilter)> {
    fetches(effects).into_iter().find_map(|r| match r {
        Request::Equipment {
            seq,
            upload_id,
            filter,
        } => Some((*seq, *upload_id, *filter)),
        _ => None,
    })
}

/// Mount and deliver a listing; returns the effects of the listing.
fn mount_with(state: &mut DashboardState, ids: &[u64]) -> Vec<Effect> {
    let effects = state.apply(Event::Mounted);
    let seq = list_seq(&effects);
    state.apply(Event::UploadsLoaded {
        seq,
        result: Ok(ids.iter().copied().map(upload).collect()),
    })
}

#[test]
fn listing_auto_selects_first_upload_and_fetches_it() {
    let mut state = DashboardState::default();
    let effects = mount_with(&mut state, &[7]);

    assert_eq!(state.selection().upload_id, Some(UploadId::new(7)));
    assert_eq!(fetches(&effects).len(), 2);
    assert_eq!(summary_req(&effects).unwrap().1, UploadId::new(7));
    let (_, id, filter) = equipment_req(&effects).unwrap();
    assert_eq!(id, UploadId::new(7));
    assert_eq!(filter, TypeFilter::All);
    assert!(state.summary().is_loading());
}

#[test]
fn selection_change_issues_exactly_one_summary_and_one_equipment_fetch() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[9, 7]);

    let effects = state.apply(Event::SelectUpload(Some(UploadId::new(7))));
    let requests = fetches(&effects);
    assert_eq!(requests.len(), 2);
    assert!(matches!(requests[0], Request::Summary { upload_id, .. } if *upload_id == UploadId::new(7)));
    assert!(matches!(requests[1], Request::Equipment { upload_id, .. } if *upload_id == UploadId::new(7)));

    // Re-selecting the same upload is a no-op.
    assert!(state.apply(Event::SelectUpload(Some(UploadId::new(7)))).is_empty());
}

#[test]
fn stale_responses_from_previous_selection_are_discarded() {
    let mut state = DashboardState::default();
    let first = mount_with(&mut state, &[9, 7]);
    let (old_summary_seq, _) = summary_req(&first).unwrap();
    let (old_equipment_seq, _, _) = equipment_req(&first).unwrap();

    let second = state.apply(Event::SelectUpload(Some(UploadId::new(7))));
    let (new_summary_seq, _) = summary_req(&second).unwrap();
    let (new_equipment_seq, _, _) = equipment_req(&second).unwrap();

    let rows_for_7 = vec![record("P7", "Pump", 7.0, 7.0, 307.0)];
    let rows_for_9 = vec![record("P9", "Pump", 9.0, 9.0, 309.0)];

    // Newer selection answers first, older one straggles in afterwards.
    state.apply(Event::SummaryLoaded {
        seq: new_summary_seq,
        result: Ok(summarize(&rows_for_7)),
    });
    state.apply(Event::EquipmentLoaded {
        seq: new_equipment_seq,
        result: Ok(rows_for_7.clone()),
    });
    state.apply(Event::SummaryLoaded {
        seq: old_summary_seq,
        result: Ok(summarize(&rows_for_9)),
    });
    state.apply(Event::EquipmentLoaded {
        seq: old_equipment_seq,
        result: Ok(rows_for_9),
    });

    assert_eq!(state.selection().upload_id, Some(UploadId::new(7)));
    assert_eq!(state.equipment_list(), rows_for_7.as_slice());
    assert_eq!(state.summary().data(), Some(&summarize(&rows_for_7)));
}

#[test]
fn type_filter_refetches_equipment_only() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);

    let effects = state.apply(Event::SetTypeFilter(TypeFilter::Pump));
    let requests = fetches(&effects);
    assert_eq!(requests.len(), 1);
    assert_eq!(
        equipment_req(&effects).map(|(_, id, f)| (id, f)),
        Some((UploadId::new(7), TypeFilter::Pump))
    );
    assert!(summary_req(&effects).is_none());

    // Same filter again: nothing to do.
    assert!(state.apply(Event::SetTypeFilter(TypeFilter::Pump)).is_empty());
}

#[test]
fn type_filter_without_selection_is_stored_silently() {
    let mut state = DashboardState::default();
    let effects = state.apply(Event::SetTypeFilter(TypeFilter::Valve));
    assert!(effects.is_empty());
    assert_eq!(state.selection().type_filter, TypeFilter::Valve);

    // The stored filter is used once an upload gets selected.
    let effects = mount_with(&mut state, &[4]);
    assert_eq!(equipment_req(&effects).unwrap().2, TypeFilter::Valve);
}

#[test]
fn chart_kind_never_fetches() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);
    for kind in ChartKind::ALL {
        assert!(state.apply(Event::SetChartKind(kind)).is_empty());
        assert_eq!(state.selection().chart_kind, kind);
    }
}

#[test]
fn submit_without_file_warns_and_does_nothing_else() {
    let mut state = DashboardState::default();
    let effects = state.apply(Event::SubmitUpload);

    assert!(effects.is_empty());
    assert!(!state.selection().is_uploading);
    let last = state.notifications().last().unwrap();
    assert_eq!(last.level, Level::Warning);
}

fn submit(state: &mut DashboardState, path: &str) -> u64 {
    state.apply(Event::SetPendingFile(Some(PathBuf::from(path))));
    let effects = state.apply(Event::SubmitUpload);
    match fetches(&effects).as_slice() {
        [Request::SubmitCsv { seq, path: sent }] => {
            assert_eq!(sent, &PathBuf::from(path));
            *seq
        }
        other => panic!("expected a single submit request, got {other:?}"),
    }
}

#[test]
fn successful_submit_resets_and_reloads() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);

    let seq = submit(&mut state, "plant.csv");
    assert!(state.selection().is_uploading);

    let effects = state.apply(Event::UploadFinished {
        seq,
        result: Ok(UploadReceipt::default()),
    });

    assert_eq!(fetches(&effects).len(), 1);
    list_seq(&effects);
    assert_eq!(state.selection().pending_file, None);
    assert_eq!(state.selection().upload_id, None);
    assert!(!state.selection().is_uploading);
    assert!(state.summary().data().is_none());
    assert_eq!(state.summary().status(), &SlotStatus::Idle);
    assert_eq!(state.notifications().last().unwrap().level, Level::Success);
}

#[test]
fn reset_after_submit_shows_uploads_loading_until_listing_arrives() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);
    assert_eq!(no_selection(&state), None);

    let seq = submit(&mut state, "plant.csv");
    let effects = state.apply(Event::UploadFinished {
        seq,
        result: Ok(UploadReceipt::default()),
    });
    assert_eq!(no_selection(&state), Some(NoSelection::Loading));

    state.apply(Event::UploadsLoaded {
        seq: list_seq(&effects),
        result: Err("connection refused".to_string()),
    });
    assert_eq!(
        no_selection(&state),
        Some(NoSelection::Failed("connection refused".to_string()))
    );
}

#[test]
fn failed_submit_also_resets_and_reloads_by_default() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);

    let seq = submit(&mut state, "broken.csv");
    let effects = state.apply(Event::UploadFinished {
        seq,
        result: Err("Server returned HTTP 400".to_string()),
    });

    list_seq(&effects);
    assert_eq!(state.selection().pending_file, None);
    assert_eq!(state.selection().upload_id, None);
    assert!(state.summary().data().is_none());
    assert_eq!(state.notifications().last().unwrap().level, Level::Error);
}

#[test]
fn keep_state_policy_leaves_selection_after_failed_submit() {
    let mut state = DashboardState::new(UploadFailurePolicy::KeepState);
    mount_with(&mut state, &[7]);

    let seq = submit(&mut state, "broken.csv");
    let effects = state.apply(Event::UploadFinished {
        seq,
        result: Err("boom".to_string()),
    });

    assert!(effects.is_empty());
    assert_eq!(state.selection().pending_file, None);
    assert_eq!(state.selection().upload_id, Some(UploadId::new(7)));
}

#[test]
fn second_submit_while_uploading_is_rejected() {
    let mut state = DashboardState::default();
    submit(&mut state, "a.csv");
    let effects = state.apply(Event::SubmitUpload);
    assert!(effects.is_empty());
    assert_eq!(state.notifications().last().unwrap().level, Level::Warning);
}

#[test]
fn summary_in_flight_during_upload_is_discarded_after_reset() {
    let mut state = DashboardState::default();
    let first = mount_with(&mut state, &[7]);
    let (summary_seq, _) = summary_req(&first).unwrap();

    let seq = submit(&mut state, "plant.csv");
    state.apply(Event::UploadFinished {
        seq,
        result: Ok(UploadReceipt::default()),
    });

    state.apply(Event::SummaryLoaded {
        seq: summary_seq,
        result: Ok(summarize(&[record("P1", "Pump", 1.0, 1.0, 1.0)])),
    });
    assert!(state.summary().data().is_none());
}

#[test]
fn unknown_upload_selection_is_rejected() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);

    let effects = state.apply(Event::SelectUpload(Some(UploadId::new(99))));
    assert!(effects.is_empty());
    assert_eq!(state.selection().upload_id, Some(UploadId::new(7)));
    assert_eq!(state.notifications().last().unwrap().level, Level::Warning);
}

#[test]
fn failed_fetch_is_distinguishable_from_loading_and_keeps_data() {
    let mut state = DashboardState::default();
    let first = mount_with(&mut state, &[7]);
    let (seq, _) = summary_req(&first).unwrap();
    let report = summarize(&[record("P1", "Pump", 10.0, 5.0, 300.0)]);
    state.apply(Event::SummaryLoaded {
        seq,
        result: Ok(report.clone()),
    });

    let refresh = state.apply(Event::Refresh);
    let (seq, _) = summary_req(&refresh).unwrap();
    assert!(state.summary().is_loading());
    assert_eq!(state.summary().data(), Some(&report));

    state.apply(Event::SummaryLoaded {
        seq,
        result: Err("connection refused".to_string()),
    });
    assert!(!state.summary().is_loading());
    assert_eq!(state.summary().error(), Some("connection refused"));
    assert_eq!(state.summary().data(), Some(&report));
}

#[test]
fn failed_listing_keeps_previous_uploads() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);

    let effects = state.apply(Event::Refresh);
    let seq = list_seq(&effects);
    let follow_up = state.apply(Event::UploadsLoaded {
        seq,
        result: Err("timeout".to_string()),
    });

    assert!(follow_up.is_empty());
    assert_eq!(state.upload_list().len(), 1);
    assert_eq!(state.selection().upload_id, Some(UploadId::new(7)));
}

#[test]
fn report_requires_selection() {
    let mut state = DashboardState::default();
    assert!(state.apply(Event::RequestReport).is_empty());
    assert!(!state.can_request_report());

    mount_with(&mut state, &[7]);
    assert_eq!(
        state.apply(Event::RequestReport),
        vec![Effect::OpenReport(UploadId::new(7))]
    );
}

#[test]
fn listing_without_current_selection_falls_back_to_newest() {
    let mut state = DashboardState::default();
    mount_with(&mut state, &[7]);

    let effects = state.apply(Event::Refresh);
    let seq = list_seq(&effects);
    let effects = state.apply(Event::UploadsLoaded {
        seq,
        result: Ok(vec![upload(12), upload(11)]),
    });

    assert_eq!(state.selection().upload_id, Some(UploadId::new(12)));
    assert_eq!(summary_req(&effects).unwrap().1, UploadId::new(12));
}
