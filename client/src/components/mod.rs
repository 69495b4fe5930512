//! Reusable UI chrome shared by pages.

pub mod dashboard_header;
pub mod nav_bar;
