//! Wire DTOs for the JSON API.
//!
//! DESIGN
//! ======
//! Fields mirror the API payloads one-to-one. Anything the API may omit is
//! `#[serde(default)]` so a sparse payload still decodes. Money fields go
//! through [`deserialize_amount`] because decimal columns arrive either as
//! JSON numbers or as numeric strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Session
// =============================================================================

/// Default login route advertised when the session endpoint is unreachable.
pub const DEFAULT_LOGIN_URL: &str = "/login/";

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_owned()
}

/// Current visitor's authentication state as reported by `/api/auth/me/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default)]
    pub logout_url: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    /// Fallback used whenever the session cannot be fetched.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            csrf_token: String::new(),
            login_url: default_login_url(),
            logout_url: None,
            user: None,
        }
    }

    /// True when the signed-in user is an admin or a barista.
    pub fn is_staff(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.roles.is_staff())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub phone_number: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub roles: UserRoles,
    /// Moderation status of the user's freelancer profile, if one exists.
    #[serde(default)]
    pub freelancer_profile_status: Option<String>,
    #[serde(default)]
    pub freelancer_public_slug: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoles {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_barista: bool,
    #[serde(default)]
    pub is_customer: bool,
}

impl UserRoles {
    pub fn is_staff(self) -> bool {
        self.is_admin || self.is_barista
    }
}

/// `{count, page, page_size, results}` list envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

fn first_page() -> u32 {
    1
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            page: first_page(),
            page_size: 0,
            results: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    pub fn empty(page_size: u32) -> Self {
        Self {
            count: 0,
            page: 1,
            page_size,
            results: Vec::new(),
        }
    }
}

// =============================================================================
// Cafe
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: f64,
    #[serde(default)]
    pub is_available: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuPayload {
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: i64,
    #[serde(default)]
    pub name: String,
    pub quantity: i64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub subtotal: f64,
}

/// Cart snapshot. `items` is absent on some mutation responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Option<Vec<CartLine>>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total: f64,
    #[serde(default)]
    pub cart_count: i64,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub status: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_price: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub customer: Option<OrderCustomer>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersPayload {
    #[serde(default)]
    pub orders: Vec<Order>,
}

// =============================================================================
// Cowork
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub zone: String,
    /// Bookable seats inside a shared space.
    #[serde(default)]
    pub seats: Vec<Seat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub spaces: Vec<Space>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacesPayload {
    #[serde(default)]
    pub zones: Vec<Zone>,
}

/// Billing period of a coworking booking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingType {
    Hourly,
    #[default]
    Daily,
    Monthly,
    SixMonth,
    Yearly,
}

impl BookingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
            Self::Monthly => "MONTHLY",
            Self::SixMonth => "SIX_MONTH",
            Self::Yearly => "YEARLY",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "HOURLY" => Some(Self::Hourly),
            "DAILY" => Some(Self::Daily),
            "MONTHLY" => Some(Self::Monthly),
            "SIX_MONTH" => Some(Self::SixMonth),
            "YEARLY" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Monthly => "Monthly",
            Self::SixMonth => "Six months",
            Self::Yearly => "Yearly",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingPreview {
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: f64,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub end_time_jalali: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreated {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub requires_admin_approval: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub space_name: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub start_time_jalali: String,
    #[serde(default)]
    pub end_time_jalali: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub price_charged: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingsPayload {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

// =============================================================================
// Blog
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogTag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub post_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsPayload {
    #[serde(default)]
    pub tags: Vec<BlogTag>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCard {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub hero_image_alt: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

/// One block of structured article content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        text: String,
    },
    Quote {
        text: String,
        #[serde(default)]
        author: Option<String>,
    },
    Image {
        url: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
    List {
        #[serde(default)]
        items: Vec<String>,
    },
    /// Block kinds this client does not render.
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub hero_image_alt: String,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub og_image_url: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub post: Post,
    #[serde(default)]
    pub related: Vec<PostRef>,
}

// =============================================================================
// Freelancers
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flair {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub color_token: String,
    #[serde(default)]
    pub icon_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtiesPayload {
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlairsPayload {
    #[serde(default)]
    pub flairs: Vec<Flair>,
}

/// A service a freelancer offers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub delivery_mode: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub starting_price: f64,
    #[serde(default)]
    pub response_time_hours: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub id: i64,
    pub title: String,
}

/// Directory listing card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreelancerCard {
    pub id: i64,
    pub public_slug: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub work_types: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub custom_specialties: Vec<String>,
    #[serde(default)]
    pub flairs: Vec<Flair>,
    #[serde(default)]
    pub services: Vec<ServiceRef>,
}

/// Public profile page payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicFreelancer {
    pub public_slug: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub work_types: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub contact_cta_text: String,
    #[serde(default)]
    pub contact_cta_url: String,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub custom_specialties: Vec<String>,
    #[serde(default)]
    pub flairs: Vec<Flair>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl PublicFreelancer {
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.public_slug
        } else {
            &self.full_name
        }
    }
}

/// The signed-in user's own freelancer profile, including moderation state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnFreelancerProfile {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub public_slug: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub work_types: Vec<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub moderation_note: String,
    #[serde(default)]
    pub contact_cta_text: String,
    #[serde(default)]
    pub contact_cta_url: String,
    #[serde(default)]
    pub specialty_ids: Vec<i64>,
    #[serde(default)]
    pub flair_ids: Vec<i64>,
    #[serde(default)]
    pub custom_specialties: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub flairs: Vec<Flair>,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// `{profile: ...}` envelope used by every freelancer profile endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileEnvelope<T> {
    pub profile: T,
}

// =============================================================================
// Staff
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub category_name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffMenuItemsPayload {
    #[serde(default)]
    pub items: Vec<StaffMenuItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesPayload {
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub phone_number: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersPayload {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualOrderCreated {
    pub order_id: i64,
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    #[serde(rename = "menu_item__name", default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_qty: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_rev: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopSpender {
    #[serde(rename = "user__phone_number", default)]
    pub phone_number: String,
    #[serde(rename = "user__full_name", default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_spent: f64,
    #[serde(default)]
    pub total_bookings: Option<u32>,
}

impl TopSpender {
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.phone_number
        } else {
            &self.full_name
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub cafe_total: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub cafe_today: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub cowork_total: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub occupancy_rate: f64,
    #[serde(default)]
    pub active_bookings: u32,
    #[serde(default)]
    pub total_spaces: u32,
    #[serde(default)]
    pub top_items: Vec<TopItem>,
    #[serde(default)]
    pub top_cafe_buyers: Vec<TopSpender>,
    #[serde(default)]
    pub top_cowork_members: Vec<TopSpender>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: i64,
    pub phone_number: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub roles: UserRoles,
}

/// Role that staff administration can assign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Barista,
    Customer,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Barista, Self::Customer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Barista => "Barista",
            Self::Customer => "Customer",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Accept a JSON number, a numeric string, or `null` (as zero).
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid amount {text:?}"))),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}
