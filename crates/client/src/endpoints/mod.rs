//! REST API endpoint implementations.

mod forms;
mod properties;
mod request;
pub mod url_encoding;

pub use forms::{
    API_KEY_HEADER, BAD_SCHEME_MESSAGE, FORMS_PATH, MISSING_SETTINGS_MESSAGE, fetch_forms,
};
pub use properties::{API_KEY_PARAM, nest_properties, properties_url, set_form_properties};
pub use request::{FailureCategory, fetch_json};
pub use url_encoding::encode_path_segment;
