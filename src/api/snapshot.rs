use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Series, ViewportState, WidthClass};
use crate::error::{ViewError, ViewResult};

use super::{ChartView, ChartViewConfig};

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Persistable setup and interactive state of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub config: ChartViewConfig,
    pub width_class: WidthClass,
    pub viewport: ViewportState,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewSnapshot,
}

impl ViewSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ViewResult<String> {
        let payload = ViewSnapshotJsonContractV1 {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or the versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> ViewResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewError::InvalidData(format!(
                "unsupported snapshot schema version {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ChartView {
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            config: self.config,
            width_class: self.width_class,
            viewport: self.transform.state(),
        }
    }

    /// Rebuilds a view from a persisted snapshot.
    ///
    /// The restored viewport is clamped into the configured limits; a
    /// compact width class keeps its translation at zero as usual.
    pub fn from_snapshot(series: Series, snapshot: ViewSnapshot) -> ViewResult<Self> {
        let mut view = Self::new(series, snapshot.config, snapshot.width_class)?;
        let restored = view.transform.restore(snapshot.viewport)?;
        if view.width_class.is_compact() {
            view.transform.reset_translation();
        }
        debug!(scale = restored.scale, "view restored from snapshot");
        Ok(view)
    }
}
