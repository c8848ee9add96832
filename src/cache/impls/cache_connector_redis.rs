use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::debug;
use redis::AsyncCommands;
use std::fmt;
use std::time::Duration;

impl fmt::Debug for CacheConnectorRedis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorRedis")
            .field("connection", &"<redis::aio::ConnectionManager>")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl CacheConnectorRedis {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn reconnect(&self) -> Result<(), CacheError> {
        self.ping().await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.connection.clone();
        let value: Option<Vec<u8>> = conn
            .get(self.prefixed(key))
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        let mut cmd = redis::cmd("SET");
        cmd.arg(self.prefixed(key)).arg(value);
        if let Some(ttl) = ttl
            && !ttl.is_zero() {
                cmd.arg("PX").arg(ttl.as_millis() as u64);
            }
        cmd.query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Set {} ({} bytes, ttl {:?})", key, value.len(), ttl);
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<(), CacheError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection.clone();
        let prefixed: Vec<String> = keys.iter().map(|key| self.prefixed(key)).collect();
        conn.del::<_, ()>(prefixed)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Deleted {} keys", keys.len());
        Ok(())
    }

    async fn index_add(&self, index: &str, key: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        let index_key = self.prefixed(index);
        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.cmd("SADD").arg(&index_key).arg(key).ignore();
        if let Some(ttl) = ttl
            && !ttl.is_zero() {
                pipe.cmd("PEXPIRE").arg(&index_key).arg(ttl.as_millis() as u64).ignore();
            }
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn index_members(&self, index: &str) -> Result<Vec<String>, CacheError> {
        let mut conn = self.connection.clone();
        let members: Vec<String> = conn
            .smembers(self.prefixed(index))
            .await
            .map_err(CacheError::RedisError)?;
        Ok(members)
    }

    async fn close(&self) -> Result<(), CacheError> {
        debug!("[Redis] Releasing connection manager");
        Ok(())
    }
}
