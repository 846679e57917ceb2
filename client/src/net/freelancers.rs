//! Public freelancer directory endpoints.

#[cfg(test)]
#[path = "freelancers_test.rs"]
mod freelancers_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{FlairsPayload, FreelancerCard, Page, ProfileEnvelope, PublicFreelancer, SpecialtiesPayload};
use crate::util::query::Query;

pub const FREELANCERS_PAGE_SIZE: u32 = 12;

/// Work arrangements a freelancer can advertise, as `(key, label)`.
pub const WORK_TYPES: [(&str, &str); 4] = [
    ("remote", "Remote"),
    ("onsite", "Onsite"),
    ("hybrid", "Hybrid"),
    ("project_based", "Project based"),
];

/// Directory filters. `tag` is a specialty slug, `flair` a flair slug.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreelancerFilter {
    pub page: u32,
    pub q: String,
    pub city: String,
    pub tag: String,
    pub flair: String,
    pub work_type: String,
}

impl FreelancerFilter {
    pub fn path(&self) -> String {
        Query::new()
            .with("page", self.page.max(1))
            .with("page_size", FREELANCERS_PAGE_SIZE)
            .with_nonempty("q", &self.q)
            .with_nonempty("city", &self.city)
            .with_nonempty("tag", &self.tag)
            .with_nonempty("flair", &self.flair)
            .with_nonempty("work_type", &self.work_type)
            .append_to("/api/freelancers/")
    }
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_specialties<T: Transport>(api: &ApiClient<T>) -> Result<SpecialtiesPayload, ApiError> {
    api.get("/api/freelancers/specialties/").await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_flairs<T: Transport>(api: &ApiClient<T>) -> Result<FlairsPayload, ApiError> {
    api.get("/api/freelancers/flairs/").await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_freelancers<T: Transport>(
    api: &ApiClient<T>,
    filter: &FreelancerFilter,
) -> Result<Page<FreelancerCard>, ApiError> {
    api.get(&filter.path()).await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_freelancer<T: Transport>(api: &ApiClient<T>, slug: &str) -> Result<PublicFreelancer, ApiError> {
    let envelope: ProfileEnvelope<PublicFreelancer> = api
        .get(&format!("/api/freelancers/{}/", urlencoding::encode(slug)))
        .await?;
    Ok(envelope.profile)
}

/// Human label for a work-type key; unknown keys are shown as-is.
pub fn work_type_label(key: &str) -> &str {
    WORK_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map_or(key, |(_, label)| *label)
}
