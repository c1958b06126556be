//! # Visitor pre-approvals and arrivals
//!
//! A resident pre-approves a visitor ([`PreApproval`]); security checks the
//! visitor in when they show up, which creates an [`Arrival`], and later
//! checks them out. Residents manage their own rows; holders of
//! [`Permission::ManagePreApprovals`] manage everyone's.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::{required, FormError};
use crate::models::{deserialize_id, deserialize_optional_id, serialize_id};
use crate::permissions::Permission;
use crate::session::Session;
use crate::time;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreApproval {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id", default)]
    pub resident_id: String,
    pub visitor_name: String,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub apartment_number: String,
}

/// A visitor who has been checked in at the gate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_optional_id", default)]
    pub pre_approval_id: Option<String>,
    pub visitor_name: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub apartment_number: String,
    #[serde(deserialize_with = "deserialize_optional_id", default)]
    pub security_guard_checkin: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_id", default)]
    pub security_guard_checkout: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /visitor-pre-approvals/arrivals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckIn {
    #[serde(serialize_with = "serialize_id")]
    pub pre_approval_id: String,
    pub visitor_name: String,
}

impl CheckIn {
    pub fn for_pre_approval(record: &PreApproval) -> Self {
        Self {
            pre_approval_id: record.id.clone(),
            visitor_name: record.visitor_name.clone(),
        }
    }
}

/// Which slice of the pre-approvals a paginated listing returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreApprovalScope {
    All,
    /// Arrival still ahead and not yet checked in.
    Upcoming,
    /// Arrival window has passed.
    Expired,
}

/// Whether the current user may edit or delete `record`.
pub fn can_manage(session: &Session, record: &PreApproval) -> bool {
    let owns = session.user().is_some_and(|user| user.owns(&record.resident_id));
    owns || session.check_permission(Permission::ManagePreApprovals)
}

/// Case-insensitive visitor-name search over one page of rows.
pub fn filter_by_name<'a>(records: &'a [PreApproval], query: &str) -> Vec<&'a PreApproval> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.visitor_name.to_lowercase().contains(&needle))
        .collect()
}

/// The pre-approval form as typed. Times are `datetime-local` input values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreApprovalDraft {
    pub visitor_name: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub purpose: String,
    pub apartment_number: String,
}

/// Body of `POST /visitor-pre-approvals` and `PUT /visitor-pre-approvals/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreApprovalPayload {
    pub visitor_name: String,
    pub arrival_time: Option<DateTime<Utc>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub apartment_number: String,
}

impl PreApprovalDraft {
    /// Prefill the edit form, showing times as wall-clock values in `tz`.
    pub fn from_record<Tz: TimeZone>(record: &PreApproval, tz: &Tz) -> Self {
        let input = |raw: &Option<String>| {
            raw.as_deref()
                .map(|raw| time::to_input(raw, tz))
                .unwrap_or_default()
        };
        Self {
            visitor_name: record.visitor_name.clone(),
            arrival_time: input(&record.arrival_time),
            departure_time: input(&record.departure_time),
            purpose: record.purpose.clone().unwrap_or_default(),
            apartment_number: record.apartment_number.clone(),
        }
    }

    /// Validate against `now` (wall-clock time in `tz`).
    ///
    /// Arrival may not fall before the start of today; departure, when both
    /// are given, must be strictly after arrival.
    pub fn validate<Tz: TimeZone>(
        &self,
        now: NaiveDateTime,
        tz: &Tz,
    ) -> Result<PreApprovalPayload, FormError> {
        let visitor_name = required("Visitor name", &self.visitor_name)?;
        let arrival = time::parse_input(&self.arrival_time)?;
        let departure = time::parse_input(&self.departure_time)?;

        let today = now.date().and_time(chrono::NaiveTime::MIN);
        if arrival.is_some_and(|arrival| arrival < today) {
            return Err(FormError::ArrivalInPast);
        }
        if let (Some(arrival), Some(departure)) = (arrival, departure) {
            if departure <= arrival {
                return Err(FormError::DepartureBeforeArrival);
            }
        }
        let apartment_number = required("Apartment number", &self.apartment_number)?;

        let to_utc = |naive: Option<NaiveDateTime>| -> Result<Option<DateTime<Utc>>, FormError> {
            naive
                .map(|naive| {
                    time::local_to_utc(naive, tz)
                        .ok_or_else(|| FormError::InvalidDateTime(naive.to_string()))
                })
                .transpose()
        };
        let purpose = self.purpose.trim();

        Ok(PreApprovalPayload {
            visitor_name,
            arrival_time: to_utc(arrival)?,
            departure_time: to_utc(departure)?,
            purpose: (!purpose.is_empty()).then(|| purpose.to_string()),
            apartment_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};
    use chrono::NaiveDate;

    fn record(resident_id: &str) -> PreApproval {
        PreApproval {
            id: "31".to_string(),
            resident_id: resident_id.to_string(),
            visitor_name: "Asha Rao".to_string(),
            arrival_time: Some("2025-03-01T10:00:00Z".to_string()),
            departure_time: None,
            purpose: None,
            created_at: "2025-02-27T08:00:00Z".to_string(),
            apartment_number: "B-204".to_string(),
        }
    }

    fn session(id: &str, role: Role) -> Session {
        Session::authenticated(User {
            id: id.to_string(),
            role,
            contact: String::new(),
        })
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn draft() -> PreApprovalDraft {
        PreApprovalDraft {
            visitor_name: "Asha Rao".to_string(),
            arrival_time: "2025-03-01T18:00".to_string(),
            departure_time: "2025-03-01T20:00".to_string(),
            purpose: " ".to_string(),
            apartment_number: "B-204".to_string(),
        }
    }

    #[test]
    fn test_pre_approval_from_wire_with_numeric_ids() {
        let record: PreApproval = serde_json::from_str(
            r#"{"id":31,"resident_id":5,"visitor_name":"Asha","arrival_time":null,
                "departure_time":null,"purpose":null,"created_at":"2025-02-27T08:00:00Z",
                "apartment_number":"B-204"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "31");
        assert_eq!(record.resident_id, "5");
        assert!(record.arrival_time.is_none());
    }

    #[test]
    fn test_arrival_from_wire() {
        let arrival: Arrival = serde_json::from_str(
            r#"{"id":3,"pre_approval_id":31,"visitor_name":"Asha","arrival_time":"2025-03-01T10:05:00Z",
                "apartment_number":"B-204","security_guard_checkin":9,"security_guard_checkout":null}"#,
        )
        .unwrap();
        assert_eq!(arrival.pre_approval_id.as_deref(), Some("31"));
        assert_eq!(arrival.security_guard_checkin.as_deref(), Some("9"));
        assert!(arrival.security_guard_checkout.is_none());
    }

    #[test]
    fn test_check_in_payload_keeps_numeric_id() {
        let json = serde_json::to_value(CheckIn::for_pre_approval(&record("5"))).unwrap();
        assert_eq!(json["pre_approval_id"], 31);
        assert_eq!(json["visitor_name"], "Asha Rao");
    }

    #[test]
    fn test_owner_or_manager_can_manage() {
        let row = record("5");
        assert!(can_manage(&session("5", Role::Resident), &row));
        assert!(!can_manage(&session("6", Role::Resident), &row));
        assert!(!can_manage(&session("6", Role::Committee), &row));
        assert!(can_manage(&session("6", Role::Admin), &row));
        assert!(!can_manage(&Session::anonymous(), &row));
        assert!(!can_manage(&Session::initializing(), &row));
    }

    #[test]
    fn test_filter_by_name() {
        let mut other = record("5");
        other.visitor_name = "Ravi".to_string();
        let rows = vec![record("5"), other];
        assert_eq!(filter_by_name(&rows, "").len(), 2);
        let hits = filter_by_name(&rows, " asha ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].visitor_name, "Asha Rao");
    }

    #[test]
    fn test_valid_draft() {
        let payload = draft().validate(noon(), &Utc).unwrap();
        assert_eq!(payload.visitor_name, "Asha Rao");
        assert_eq!(payload.purpose, None);
        assert_eq!(
            payload.arrival_time.map(|t| t.to_rfc3339()),
            Some("2025-03-01T18:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_arrival_earlier_today_is_allowed() {
        let mut d = draft();
        d.arrival_time = "2025-03-01T08:00".to_string();
        assert!(d.validate(noon(), &Utc).is_ok());
        d.arrival_time = "2025-02-28T23:59".to_string();
        assert_eq!(d.validate(noon(), &Utc), Err(FormError::ArrivalInPast));
    }

    #[test]
    fn test_departure_must_follow_arrival() {
        let mut d = draft();
        d.departure_time = d.arrival_time.clone();
        assert_eq!(d.validate(noon(), &Utc), Err(FormError::DepartureBeforeArrival));
        d.arrival_time.clear();
        assert!(d.validate(noon(), &Utc).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut d = draft();
        d.visitor_name = " ".to_string();
        assert_eq!(d.validate(noon(), &Utc), Err(FormError::Required("Visitor name")));
        let mut d = draft();
        d.apartment_number.clear();
        assert_eq!(
            d.validate(noon(), &Utc),
            Err(FormError::Required("Apartment number"))
        );
    }

    #[test]
    fn test_draft_from_record() {
        let d = PreApprovalDraft::from_record(&record("5"), &Utc);
        assert_eq!(d.arrival_time, "2025-03-01T10:00");
        assert_eq!(d.departure_time, "");
        assert_eq!(d.apartment_number, "B-204");
    }
}
