use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use api::ClientConfig;

/// Environment-based application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub backend_base_url: String,
    pub backend_timeout: Duration,
    pub environment: String,
}

impl AppConfig {
    /// Load configuration from `.env` and environment variables with defaults
    pub fn load() -> std::io::Result<Self> {
        Self::load_with_base(None)
    }

    /// Load configuration with an optional base directory for relative paths.
    /// This is primarily for testing purposes
    pub fn load_with_base(base_dir: Option<PathBuf>) -> std::io::Result<Self> {
        let base = match base_dir {
            Some(base) => base,
            None => {
                let current_dir = env::current_dir()?;
                let env_file = current_dir.join(".env");
                if env_file.exists() {
                    dotenv::from_path(&env_file).ok();
                }
                current_dir
            }
        };

        let timeout_secs = env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        Ok(Self {
            data_path: Self::get_path_from_env("DATA_PATH", "./data", &base),
            backend_base_url: env::var("BACKEND_API_BASEURL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            backend_timeout: Duration::from_secs(timeout_secs),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()),
        })
    }

    /// Get a path from environment variable or use default
    fn get_path_from_env(var_name: &str, default: &str, base_dir: &Path) -> PathBuf {
        let path = PathBuf::from(env::var(var_name).unwrap_or_else(|_| default.to_string()));

        // If the path is relative, make it relative to the base directory
        if path.is_relative() {
            base_dir.join(path)
        } else {
            path
        }
    }

    /// Directory holding one storage file per tab
    pub fn tabs_path(&self) -> PathBuf {
        self.data_path.join("tabs")
    }

    /// Get the logs directory path
    pub fn logs_path(&self) -> PathBuf {
        self.data_path.join("logs")
    }

    /// Backend client settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(self.backend_base_url.clone())
            .with_timeout(self.backend_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Use a mutex to ensure tests don't interfere with each other's environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DATA_PATH");
        env::remove_var("BACKEND_API_BASEURL");
        env::remove_var("BACKEND_TIMEOUT_SECS");
        env::remove_var("ENVIRONMENT");
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_with_base(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_eq!(config.data_path, temp_dir.path().join("./data"));
        assert_eq!(config.backend_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend_timeout, Duration::from_secs(10));
        assert_eq!(config.environment, "dev");
        assert!(config.tabs_path().ends_with("tabs"));
        assert!(config.logs_path().ends_with("logs"));
    }

    #[test]
    fn test_env_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let temp_dir = TempDir::new().unwrap();
        let absolute = temp_dir.path().join("elsewhere");
        env::set_var("DATA_PATH", &absolute);
        env::set_var("BACKEND_API_BASEURL", "http://backend:9000");
        env::set_var("BACKEND_TIMEOUT_SECS", "3");

        let config = AppConfig::load_with_base(Some(PathBuf::from("/unused"))).unwrap();
        assert_eq!(config.data_path, absolute);
        assert_eq!(config.backend_base_url, "http://backend:9000");

        let client = config.client_config();
        assert_eq!(client.base_url, "http://backend:9000");
        assert_eq!(client.timeout, Duration::from_secs(3));

        clear_env();
    }

    #[test]
    fn test_bad_timeout_uses_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("BACKEND_TIMEOUT_SECS", "soon");

        let config = AppConfig::load_with_base(Some(PathBuf::from("/base"))).unwrap();
        assert_eq!(config.backend_timeout, Duration::from_secs(10));
        assert_eq!(config.data_path, PathBuf::from("/base/data"));

        clear_env();
    }
}
