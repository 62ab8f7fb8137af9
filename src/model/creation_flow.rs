use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CreationFlowStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl CreationFlowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "abandoned" => Some(Self::Abandoned),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreationFlowDto {
    pub token: String,
    pub status: CreationFlowStatus,
    pub prediction_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_value() {
        for status in [
            CreationFlowStatus::InProgress,
            CreationFlowStatus::Completed,
            CreationFlowStatus::Abandoned,
        ] {
            assert_eq!(CreationFlowStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CreationFlowStatus::parse("expired"), None);
    }
}
