use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A scheduled home-care service request. Created once by an intake
/// submission; after that only `status` ever changes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Appointment {
    pub id: Uuid,
    pub evaluator_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evaluator_signature: Option<String>,
    pub parent_guardian_name: String,
    pub client_name: String,
    pub service_provider_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub appointment_date: jiff::civil::Date,
    pub appointment_time: jiff::civil::Time,
    /// Selected categories, in selection order. Never empty, never duplicated.
    pub service_type: Vec<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub submitted_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Declined,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Approved => "approved",
            AppointmentStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "approved" => Ok(AppointmentStatus::Approved),
            "declined" => Ok(AppointmentStatus::Declined),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// The fixed service categories offered by the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServiceType {
    Homemaker,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Community Connection")]
    CommunityConnection,
    #[serde(rename = "Supported Community Connection")]
    SupportedCommunityConnection,
    Respite,
    Mentorship,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Homemaker,
        ServiceType::PersonalCare,
        ServiceType::CommunityConnection,
        ServiceType::SupportedCommunityConnection,
        ServiceType::Respite,
        ServiceType::Mentorship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Homemaker => "Homemaker",
            ServiceType::PersonalCare => "Personal Care",
            ServiceType::CommunityConnection => "Community Connection",
            ServiceType::SupportedCommunityConnection => "Supported Community Connection",
            ServiceType::Respite => "Respite",
            ServiceType::Mentorship => "Mentorship",
        }
    }

    /// Encode a selection the way tabular backends store it.
    pub fn join(selection: &[ServiceType]) -> String {
        selection
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Decode a `", "`-joined selection back into the ordered sequence.
    /// An empty string decodes to an empty selection.
    pub fn split(joined: &str) -> Result<Vec<ServiceType>, CoreError> {
        if joined.is_empty() {
            return Ok(Vec::new());
        }
        joined.split(", ").map(str::parse).collect()
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownServiceType(s.to_string()))
    }
}
