//! Transport layer: the blocking GET seam, its reqwest implementation, and
//! query-string encoding.

pub mod http_transport;
pub mod query;

pub use http_transport::{HttpTransport, HttpTransportConfig};
pub use query::QueryParams;

use estatus_core::errors::BackendError;

/// Raw response to a GET request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single blocking GET. Implementations never retry; a non-2xx
/// status is returned as a response, not an error.
pub trait Transport {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<TransportResponse, BackendError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<TransportResponse, BackendError> {
        (**self).get(url, headers)
    }
}
