//! Request construction and submission against the management endpoint.

mod request;

pub use request::{build_endpoint, build_request, merge_output_mode, parse_method, submit};
