//! Shared application layer for the equipment dashboard.
//!
//! This crate holds the dashboard view-model used by both the desktop UI and
//! the CLI: the state container and its reducer, request sequencing, effect
//! execution against an [`ce_client::EquipmentApi`], derived chart series and
//! configuration loading.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod executor;
pub mod series;
pub mod session;

// Re-export key types for convenience
pub use config::{ApiConfig, DashboardConfig, UploadFailurePolicy, load_config};
pub use dashboard::{
    DashboardState, Effect, Event, Level, Notification, Request, Selection, Slot, SlotStatus,
};
pub use error::{AppError, AppResult};
pub use executor::execute;
pub use series::{
    ChartData, NoSelection, SummaryCard, chart_data, equipment_row, no_selection, summary_cards,
};
pub use session::Session;
