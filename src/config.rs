use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default source file name, matching the catalog export this service was
/// built around.
pub const DEFAULT_SOURCE: &str = "LE.txt";

/// Default HTTP API port
pub const DEFAULT_PORT: u16 = 3000;

/// Default source watcher poll interval
pub const DEFAULT_WATCH_INTERVAL: Duration = Duration::from_millis(2000);

/// Service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Path to the delimited source file
    pub source: PathBuf,
    /// HTTP API port, bound on all interfaces
    pub port: u16,
    /// Whether the mtime-polling source watcher runs
    pub watch: bool,
    /// Watcher poll interval; also the debounce window between reloads
    pub watch_interval: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            port: DEFAULT_PORT,
            watch: false,
            watch_interval: DEFAULT_WATCH_INTERVAL,
        }
    }
}

impl ServiceConfig {
    /// Create a configuration for the given source file
    pub fn new(source: PathBuf) -> Self {
        Self {
            source,
            ..Default::default()
        }
    }

    /// Set the HTTP API port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enable or disable the source watcher
    pub fn with_watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    /// Set the watcher poll interval
    pub fn with_watch_interval(mut self, interval: Duration) -> Self {
        self.watch_interval = interval;
        self
    }

    /// Socket address the HTTP API binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.source, PathBuf::from("LE.txt"));
        assert_eq!(config.port, 3000);
        assert!(!config.watch);
        assert_eq!(config.watch_interval, Duration::from_millis(2000));
    }

    #[test]
    fn test_config_builder() {
        let config = ServiceConfig::new(PathBuf::from("/data/parts.csv"))
            .with_port(8080)
            .with_watch(true)
            .with_watch_interval(Duration::from_millis(500));

        assert_eq!(config.source, PathBuf::from("/data/parts.csv"));
        assert_eq!(config.port, 8080);
        assert!(config.watch);
        assert_eq!(config.watch_interval, Duration::from_millis(500));
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
    }
}
