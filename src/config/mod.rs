use std::env;

/// Runtime configuration for the upload server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (default: 8080)
    pub port: u16,

    /// Directory the background image lives in (default: "./data")
    pub data_dir: String,

    /// Maximum accepted request body in bytes (default: 32 MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: "./data".to_string(),
            max_upload_size: 32 * 1024 * 1024, // 32 MB
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            data_dir: env::var("DATA_DIR").unwrap_or(default.data_dir),

            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),
        }
    }

    /// Create config for local development
    pub fn development() -> Self {
        Self {
            port: 3000,
            data_dir: "./data".to_string(),
            max_upload_size: 32 * 1024 * 1024,
        }
    }
}
