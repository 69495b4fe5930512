//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the view bound to one route entry. Shared chrome lives in
//! `components`.

pub mod customer_dashboard;
pub mod landing;
pub mod not_found;
pub mod staff_dashboard;
