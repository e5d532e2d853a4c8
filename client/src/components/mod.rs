//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render map, route, and traffic widgets from props and signals
//! handed down by the pages; none of them issue network requests.

pub mod map_view;
pub mod notice_banner;
pub mod route_card;
pub mod stat_card;
pub mod traffic_light;
