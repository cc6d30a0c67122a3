pub mod body;
pub mod error;
pub mod params;
pub mod query;

pub use body::{
    form_urlencoded_body, json_body, RequestBody, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE,
};
pub use error::ParamsError;
pub use params::Params;
pub use query::{decode_query, encode_query};

pub type Result<T> = std::result::Result<T, ParamsError>;
