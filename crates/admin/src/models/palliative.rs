//! Palliative care unit directory records.

use chrono::{DateTime, Utc};
use gpdn_core::types::{ServiceId, UnitId};
use serde::{Deserialize, Serialize};

/// A palliative care unit listed in the public directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalliativeUnit {
    #[serde(rename = "_id")]
    pub id: UnitId,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub service_id: Option<ServiceId>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub contact_details: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A service category a unit can offer (e.g. inpatient, home care).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalliativeService {
    #[serde(rename = "_id")]
    pub id: ServiceId,
    pub service: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
