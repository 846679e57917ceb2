//! Session, account, and freelancer self-service endpoints under `/api/auth/`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;
use serde_json::Value;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{
    FlairsPayload, OwnFreelancerProfile, ProfileEnvelope, Session, SpecialtiesPayload,
};

pub const SESSION_PATH: &str = "/api/auth/me/";
pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const PROFILE_PATH: &str = "/api/auth/profile/";
pub const FREELANCER_PROFILE_PATH: &str = "/api/auth/freelancer-profile/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub national_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub birth_date: String,
}

/// Editable fields of the user's freelancer profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FreelancerProfileUpdate {
    pub public_slug: String,
    pub headline: String,
    pub introduction: String,
    pub work_types: Vec<String>,
    pub city: String,
    pub province: String,
    pub is_public: bool,
    pub contact_cta_text: String,
    pub contact_cta_url: String,
    pub specialty_ids: Vec<i64>,
    pub flair_ids: Vec<i64>,
    pub custom_specialties: Vec<String>,
}

/// Create or update payload for a freelancer service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceInput {
    pub title: String,
    pub description: String,
    pub delivery_mode: String,
    pub starting_price: f64,
    pub response_time_hours: u32,
    pub is_active: bool,
}

/// Specialty and flair choices offered to freelancers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreelancerTaxonomy {
    pub specialties: SpecialtiesPayload,
    pub flairs: FlairsPayload,
}

/// Fetch the current session.
///
/// # Errors
///
/// Returns the API error; callers normally fall back to an anonymous session.
pub async fn fetch_session<T: Transport>(api: &ApiClient<T>) -> Result<Session, ApiError> {
    api.get(SESSION_PATH).await
}

/// # Errors
///
/// Returns the API error, e.g. `invalid credentials`.
pub async fn login<T: Transport>(api: &ApiClient<T>, request: &LoginRequest) -> Result<(), ApiError> {
    api.post_json::<Value, _>(LOGIN_PATH, request).await.map(drop)
}

/// # Errors
///
/// Returns the API error; field validation arrives as a stringified `errors` map.
pub async fn register<T: Transport>(api: &ApiClient<T>, request: &RegisterRequest) -> Result<(), ApiError> {
    api.post_json::<Value, _>(REGISTER_PATH, request).await.map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn logout<T: Transport>(api: &ApiClient<T>) -> Result<(), ApiError> {
    api.post_empty::<Value>(LOGOUT_PATH).await.map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn update_profile<T: Transport>(api: &ApiClient<T>, update: &ProfileUpdate) -> Result<(), ApiError> {
    api.patch_json::<Value, _>(PROFILE_PATH, update).await.map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_freelancer_profile<T: Transport>(api: &ApiClient<T>) -> Result<OwnFreelancerProfile, ApiError> {
    let envelope: ProfileEnvelope<OwnFreelancerProfile> = api.get(FREELANCER_PROFILE_PATH).await?;
    Ok(envelope.profile)
}

/// Load specialty and flair choices concurrently.
///
/// # Errors
///
/// Returns the first failure of either request.
pub async fn fetch_freelancer_taxonomy<T: Transport>(api: &ApiClient<T>) -> Result<FreelancerTaxonomy, ApiError> {
    let (specialties, flairs) = futures::future::try_join(
        api.get::<SpecialtiesPayload>("/api/auth/freelancer-specialties/"),
        api.get::<FlairsPayload>("/api/auth/freelancer-flairs/"),
    )
    .await?;
    Ok(FreelancerTaxonomy { specialties, flairs })
}

/// # Errors
///
/// Returns the API error.
pub async fn save_freelancer_profile<T: Transport>(
    api: &ApiClient<T>,
    update: &FreelancerProfileUpdate,
) -> Result<OwnFreelancerProfile, ApiError> {
    let envelope: ProfileEnvelope<OwnFreelancerProfile> = api.patch_json(FREELANCER_PROFILE_PATH, update).await?;
    Ok(envelope.profile)
}

/// Send the profile to moderation.
///
/// # Errors
///
/// Returns the API error.
pub async fn submit_freelancer_profile<T: Transport>(api: &ApiClient<T>) -> Result<OwnFreelancerProfile, ApiError> {
    let envelope: ProfileEnvelope<OwnFreelancerProfile> =
        api.post_empty("/api/auth/freelancer-profile/submit/").await?;
    Ok(envelope.profile)
}

/// # Errors
///
/// Returns the API error.
pub async fn create_freelancer_service<T: Transport>(api: &ApiClient<T>, input: &ServiceInput) -> Result<(), ApiError> {
    api.post_json::<Value, _>("/api/auth/freelancer-services/", input)
        .await
        .map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn update_freelancer_service<T: Transport>(
    api: &ApiClient<T>,
    service_id: i64,
    input: &ServiceInput,
) -> Result<(), ApiError> {
    api.patch_json::<Value, _>(&service_path(service_id), input)
        .await
        .map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn delete_freelancer_service<T: Transport>(api: &ApiClient<T>, service_id: i64) -> Result<(), ApiError> {
    api.delete::<Value>(&service_path(service_id)).await.map(drop)
}

fn service_path(service_id: i64) -> String {
    format!("/api/auth/freelancer-services/{service_id}/")
}

/// Split a comma-separated specialty list, dropping blanks.
pub fn parse_custom_specialties(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
