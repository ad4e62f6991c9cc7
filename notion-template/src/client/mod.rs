mod http;
mod response;

pub use http::*;
