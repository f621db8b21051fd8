pub mod api_utils;
pub mod date_utils;
pub mod notifications;
pub mod session_storage;
