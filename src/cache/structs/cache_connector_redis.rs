use redis::aio::ConnectionManager;

/// The connection manager reconnects on its own after a dropped connection,
/// so `reconnect` on this connector is a plain liveness check.
#[derive(Clone)]
pub struct CacheConnectorRedis {
    pub(crate) connection: ConnectionManager,
    pub(crate) prefix: String,
}
