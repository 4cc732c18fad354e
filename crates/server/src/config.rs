use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub rest_addr: SocketAddr,
    pub snapshot_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rest_addr: "0.0.0.0:8080".parse().unwrap(),
            snapshot_path: PathBuf::from("data.json"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let rest_addr = std::env::var("ALERTHUB_REST_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rest_addr);
        let snapshot_path = std::env::var("ALERTHUB_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_path);
        Self {
            rest_addr,
            snapshot_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_and_snapshot_path() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.rest_addr.port(), 8080);
        assert_eq!(cfg.snapshot_path, PathBuf::from("data.json"));
    }
}
