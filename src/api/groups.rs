//! Group Endpoints
//!
//! Typed wrappers for `/groups/{id}` and its members and payments.

use reqwest::Method;
use serde_json::json;

use super::{payload, ApiClient, ApiErrors};
use crate::models::{Group, GroupPayment, Member, MemberPayment, NewMember, NewPayment};

impl ApiClient {
    pub async fn get_group(&self, id: u32) -> Result<Group, ApiErrors> {
        self.fetch(&format!("/groups/{}", id), &json!({}), Method::GET).await
    }

    pub async fn add_member(&self, group_id: u32, member: &NewMember) -> Result<Member, ApiErrors> {
        let endpoint = format!("/groups/{}/members", group_id);
        self.fetch(&endpoint, &payload(member)?, Method::POST).await
    }

    pub async fn add_payment(
        &self,
        group_id: u32,
        name: &str,
        total_amount: f64,
        member_payments: Vec<MemberPayment>,
    ) -> Result<GroupPayment, ApiErrors> {
        let endpoint = format!("/groups/{}/payments", group_id);
        let body = NewPayment {
            name: name.to_string(),
            total_amount,
            member_payments,
        };
        self.fetch(&endpoint, &payload(&body)?, Method::POST).await
    }

    pub async fn get_payment(&self, group_id: u32, payment_id: u32) -> Result<GroupPayment, ApiErrors> {
        let endpoint = format!("/groups/{}/payments/{}", group_id, payment_id);
        self.fetch(&endpoint, &json!({}), Method::GET).await
    }
}
