//! ce-core: shared data model for the equipment dashboard.
//!
//! Contains:
//! - model (wire records returned by the equipment API)
//! - ids (upload identifiers)
//! - selection (type filter and chart kind choices)
//! - format (display rounding for summary cards)
//! - error (shared error types)

pub mod error;
pub mod format;
pub mod ids;
pub mod model;
pub mod selection;

pub use error::{CoreError, CoreResult};
pub use format::format_fixed2;
pub use ids::UploadId;
pub use model::*;
pub use selection::{ChartKind, TypeFilter};
