pub mod api_utils;
pub mod backend_error;
pub mod components;
pub mod config;
pub mod navigation;
pub mod notifications;
