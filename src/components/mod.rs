//! Page Components
//!
//! Each panel owns one region of the server-rendered page: it binds its
//! handlers once and re-renders its container on refresh.

pub mod add_officer_panel;
pub mod available_list;
pub mod chosen_list;
pub mod loading_indicator;
pub mod new_officer_popup;
pub mod no_application_list;
