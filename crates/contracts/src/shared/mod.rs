pub mod api_error;

pub use api_error::{error_message, ErrorResponse};
