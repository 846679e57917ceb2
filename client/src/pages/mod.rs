//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped loading and mutation flow and delegates
//! presentation to `components`. Testable decisions (validation, payload
//! shaping, ranking) live in plain functions beside the component.

pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;

pub mod cafe_cart;
pub mod cafe_checkout;
pub mod cafe_menu;
pub mod cafe_orders;

pub mod cowork_booking;
pub mod cowork_my_bookings;
pub mod cowork_spaces;

pub mod blog_list;
pub mod blog_post;

pub mod freelancer_profile;
pub mod freelancers_list;

pub mod staff_analytics;
pub mod staff_lookup;
pub mod staff_manual_order;
pub mod staff_menu_stock;
pub mod staff_orders;
pub mod staff_users;
