use besafe::AirQualityQueries;

/// Holds the configuration for a BeSafe web server.
pub struct ServerConfig {
    /// The queries, already bound to the loaded graph.
    pub queries: AirQualityQueries,
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
}
