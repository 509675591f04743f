use std::net::SocketAddrV4;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// base url of the pricing source, `/prices` is appended
    pub pricing_endpoint: String,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, pricing_endpoint: String) -> Self {
        Self {
            addr,
            pricing_endpoint,
        }
    }
}
