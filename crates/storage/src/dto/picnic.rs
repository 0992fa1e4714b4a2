use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::user::UserResponse;

/// Request payload for scheduling a picnic
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePicnicRequest {
    #[validate(range(min = 1, message = "city_id must be a positive id"))]
    pub city_id: i32,

    /// Picnic time; RFC 3339 offsets are converted to UTC, naive times are taken as UTC
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub time: NaiveDateTime,
}

/// Picnic with its city resolved to a name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PicnicResponse {
    pub id: i32,
    pub city: String,
    pub time: NaiveDateTime,
}

/// Picnic together with everyone registered to it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PicnicDetailResponse {
    pub id: i32,
    pub city: String,
    pub time: NaiveDateTime,
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PicnicListFilter {
    /// Only picnics taking place exactly at this time
    #[serde(default, deserialize_with = "super::timestamp::option::deserialize")]
    pub datetime: Option<NaiveDateTime>,

    /// Include picnics that already took place
    #[serde(default = "default_past")]
    pub past: bool,
}

fn default_past() -> bool {
    true
}

impl Default for PicnicListFilter {
    fn default() -> Self {
        Self {
            datetime: None,
            past: default_past(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_includes_past_by_default() {
        let filter: PicnicListFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.past);
        assert!(filter.datetime.is_none());
    }

    #[test]
    fn test_filter_parses_datetime() {
        let filter: PicnicListFilter =
            serde_json::from_str(r#"{"datetime": "2026-07-01T12:30:00", "past": false}"#).unwrap();
        assert!(!filter.past);
        assert_eq!(
            filter.datetime.unwrap().to_string(),
            "2026-07-01 12:30:00"
        );
    }

    #[test]
    fn test_create_request_accepts_utc_designator() {
        let req: CreatePicnicRequest =
            serde_json::from_str(r#"{"city_id": 1, "time": "2026-07-01T12:30:00Z"}"#).unwrap();
        assert_eq!(req.time.to_string(), "2026-07-01 12:30:00");
    }

    #[test]
    fn test_create_request_normalises_offset_to_utc() {
        let req: CreatePicnicRequest =
            serde_json::from_str(r#"{"city_id": 1, "time": "2026-07-01T12:30:00+03:00"}"#)
                .unwrap();
        assert_eq!(req.time.to_string(), "2026-07-01 09:30:00");
    }

    #[test]
    fn test_filter_normalises_offset_to_utc() {
        let filter: PicnicListFilter =
            serde_json::from_str(r#"{"datetime": "2026-07-01T12:30:00Z"}"#).unwrap();
        assert_eq!(filter.datetime.unwrap().to_string(), "2026-07-01 12:30:00");
        assert!(filter.past);
    }

    #[test]
    fn test_create_request_rejects_non_positive_city() {
        let req: CreatePicnicRequest =
            serde_json::from_str(r#"{"city_id": 0, "time": "2026-07-01T12:30:00"}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
