//! Auth & User Endpoints
//!
//! Typed wrappers for `/auth/*` and `/users/{email}`.

use reqwest::Method;
use serde_json::json;

use super::{payload, segment, ApiClient, ApiErrors};
use crate::models::{AuthToken, Credentials, Group, NewGroup, NewUser, User, UserPatch};

impl ApiClient {
    pub async fn sign_up(&self, user: &NewUser) -> Result<AuthToken, ApiErrors> {
        self.fetch("/auth/sign-up", &payload(user)?, Method::POST).await
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthToken, ApiErrors> {
        self.fetch("/auth/token", &payload(credentials)?, Method::POST).await
    }

    pub async fn patch_user(&self, email: &str, patch: &UserPatch) -> Result<User, ApiErrors> {
        let endpoint = format!("/users/{}", segment(email));
        self.fetch(&endpoint, &payload(patch)?, Method::POST).await
    }

    pub async fn get_user(&self, email: &str) -> Result<User, ApiErrors> {
        let endpoint = format!("/users/{}", segment(email));
        self.fetch(&endpoint, &json!({}), Method::GET).await
    }

    /// Groups the user belongs to
    pub async fn get_user_groups(&self, email: &str) -> Result<Vec<Group>, ApiErrors> {
        let endpoint = format!("/users/{}/groups", segment(email));
        self.fetch(&endpoint, &json!({}), Method::GET).await
    }

    /// Create a group owned by the user
    pub async fn make_group(&self, email: &str, group: &NewGroup) -> Result<Group, ApiErrors> {
        let endpoint = format!("/users/{}/groups", segment(email));
        self.fetch(&endpoint, &payload(group)?, Method::POST).await
    }
}
