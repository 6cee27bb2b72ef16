//! HTTP transport layer for the Hugging Face API.

mod http_transport;

pub(crate) use http_transport::map_status_error;
pub use http_transport::{HttpTransport, ReqwestTransport, TransportResponse};
