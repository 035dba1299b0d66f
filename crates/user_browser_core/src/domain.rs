//! crates/user_browser_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! The record shape is owned by the external user API; once decoded,
//! a record is treated as an immutable value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One externally-sourced synthetic user profile.
///
/// Fields mirror the payload of the random user endpoint. Unknown fields in
/// the payload are ignored on decode; no shape validation happens beyond
/// what decoding itself implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub uid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub avatar: String,
    pub employment: Employment,
    pub address: Address,
    pub credit_card: CreditCard,
    pub subscription: Subscription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub title: String,
    pub key_skill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub cc_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: String,
    pub status: String,
    pub payment_method: String,
    pub term: String,
}

impl UserRecord {
    /// "First Last" as shown in the screen header.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down payload in the shape the live endpoint returns.
    const SAMPLE: &str = r#"{
        "id": 6204,
        "uid": "2d6f0a5e-16b9-4a4e-92bd-1f3b0aafcf39",
        "password": "mkogDGbBV9",
        "first_name": "Danielle",
        "last_name": "Walsh",
        "username": "danielle.walsh",
        "email": "danielle.walsh@email.com",
        "avatar": "https://robohash.org/similiquevoluptatem.png?size=300x300",
        "gender": "Female",
        "phone_number": "+1-555-283-0114",
        "date_of_birth": "1973-05-14",
        "employment": { "title": "Retail Consultant", "key_skill": "Fast learner" },
        "address": {
            "city": "Lake Lulu",
            "street_name": "Kreiger Trail",
            "state": "Wisconsin",
            "country": "United States"
        },
        "credit_card": { "cc_number": "6771-8981-6237-0544" },
        "subscription": {
            "plan": "Gold",
            "status": "Active",
            "payment_method": "Paypal",
            "term": "Monthly"
        }
    }"#;

    #[test]
    fn decodes_live_payload_shape() {
        let user: UserRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.id, 6204);
        assert_eq!(user.full_name(), "Danielle Walsh");
        assert_eq!(user.employment.key_skill, "Fast learner");
        assert_eq!(user.subscription.payment_method, "Paypal");
        assert_eq!(
            user.date_of_birth,
            NaiveDate::from_ymd_opt(1973, 5, 14).unwrap()
        );
    }

    #[test]
    fn extra_payload_fields_are_ignored() {
        // street_name above is not part of the domain model.
        let user: UserRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.address.city, "Lake Lulu");
        assert_eq!(user.address.country, "United States");
    }
}
