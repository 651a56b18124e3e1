//! User-selectable filter and chart choices.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Equipment type filter applied to `GET /filter-equipment/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Pump,
    Valve,
    Reactor,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 4] = [
        TypeFilter::All,
        TypeFilter::Pump,
        TypeFilter::Valve,
        TypeFilter::Reactor,
    ];

    /// Value of the `type` query parameter; `All` sends none.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Pump => Some("Pump"),
            TypeFilter::Valve => Some("Valve"),
            TypeFilter::Reactor => Some("Reactor"),
        }
    }

    pub fn label(self) -> &'static str {
        self.query_value().unwrap_or("All Types")
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value().unwrap_or(""))
    }
}

impl FromStr for TypeFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" | "All" => Ok(TypeFilter::All),
            "Pump" => Ok(TypeFilter::Pump),
            "Valve" => Ok(TypeFilter::Valve),
            "Reactor" => Ok(TypeFilter::Reactor),
            other => Err(CoreError::UnknownTypeFilter {
                value: other.to_string(),
            }),
        }
    }
}

/// Which derived series is visualized. Never implies network I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Type,
    Flow,
    Scatter,
    Temp,
    /// Total equipment per upload, drawn from the uploads listing.
    Trend,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Type,
        ChartKind::Flow,
        ChartKind::Scatter,
        ChartKind::Temp,
        ChartKind::Trend,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ChartKind::Type => "type",
            ChartKind::Flow => "flow",
            ChartKind::Scatter => "scatter",
            ChartKind::Temp => "temp",
            ChartKind::Trend => "trend",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Type => "Type Distribution",
            ChartKind::Flow => "Flowrate Comparison",
            ChartKind::Scatter => "Flowrate vs Pressure",
            ChartKind::Temp => "Temperature Distribution",
            ChartKind::Trend => "Upload Trend",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChartKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s.trim())
            .ok_or_else(|| CoreError::UnknownChartKind {
                value: s.to_string(),
            })
    }
}
