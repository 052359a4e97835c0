//! Frontend Models
//!
//! Data structures matching backend entities.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User data structure (matches backend); the password is never read back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(default, alias = "phoneNumber")]
    pub phone_number: Option<String>,
}

/// Group data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub payments: Vec<GroupPayment>,
}

impl Group {
    /// Members keyed by id, the lookup the payment views render from
    pub fn member_index(&self) -> HashMap<u32, Member> {
        self.members.iter().map(|m| (m.id, m.clone())).collect()
    }

    pub fn payment_mut(&mut self, payment_id: u32) -> Option<&mut GroupPayment> {
        self.payments.iter_mut().find(|p| p.id == payment_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
}

/// A payment made by one member on behalf of the group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPayment {
    pub id: u32,
    pub name: String,
    pub total_amount: f64,
    #[serde(with = "timestamp")]
    pub created_on: DateTime<Utc>,
    /// The payer
    pub member_id: u32,
    #[serde(default)]
    pub member_payments: Vec<MemberPayment>,
}

/// One member's share of a `GroupPayment` (a split)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberPayment {
    pub member_id: u32,
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGroup {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewMember {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPayment {
    pub name: String,
    pub total_amount: f64,
    pub member_payments: Vec<MemberPayment>,
}

/// `created_on` arrives as RFC 3339 or as the RFC 2822 form Flask emits
mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognized timestamp: {}", raw)))
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_payment_accepts_flask_timestamp() {
        let payment: GroupPayment = serde_json::from_value(json!({
            "id": 7,
            "name": "Groceries",
            "total_amount": 100.0,
            "created_on": "Tue, 09 Jun 2026 18:30:00 GMT",
            "member_id": 1,
            "member_payments": [
                { "member_id": 2, "amount": 60.0, "paid": false },
                { "member_id": 3, "amount": 40.0, "paid": true }
            ]
        }))
        .unwrap();

        assert_eq!(payment.created_on.year(), 2026);
        assert_eq!(payment.created_on.day(), 9);
        assert_eq!(payment.created_on.hour(), 18);
        assert_eq!(payment.member_payments.len(), 2);
        assert!(payment.member_payments[1].paid);
    }

    #[test]
    fn test_parse_timestamp_rfc3339_with_offset() {
        let ts = parse_timestamp("2026-06-09T20:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 18);
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_group_defaults_missing_collections() {
        let group: Group = serde_json::from_value(json!({ "id": 1, "name": "Trip" })).unwrap();
        assert!(group.members.is_empty());
        assert!(group.payments.is_empty());
    }

    #[test]
    fn test_user_patch_omits_unset_fields() {
        let patch = UserPatch {
            phone_number: Some("555-0100".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "phoneNumber": "555-0100" }));
    }

    #[test]
    fn test_new_user_never_sends_null_phone() {
        let user = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            phone_number: None,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("phoneNumber").is_none());
        assert_eq!(value["password"], "secret");
    }
}
