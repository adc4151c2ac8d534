use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served as static files for every path other than the API.
    pub root_dir: PathBuf,
    pub images_dir: PathBuf,
    pub layers_dir: PathBuf,
    pub csv_file: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("LAYERDROP_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LAYERDROP_HOST: {e}"))?;

        let port: u16 = env_or("LAYERDROP_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid LAYERDROP_PORT: {e}"))?;

        let root_dir = PathBuf::from(env_or("LAYERDROP_ROOT_DIR", "."));

        let images_dir = std::env::var("LAYERDROP_IMAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| root_dir.join("images"));

        let layers_dir = std::env::var("LAYERDROP_LAYERS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| root_dir.join("layers"));

        let csv_file = env_or("LAYERDROP_CSV_FILE", "user_inputs.csv");
        if csv_file.is_empty() || csv_file.contains(['/', '\\']) {
            return Err(format!("Invalid LAYERDROP_CSV_FILE: '{csv_file}' is not a plain file name"));
        }

        let max_body_size: usize = env_or("LAYERDROP_MAX_BODY_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid LAYERDROP_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("LAYERDROP_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            root_dir,
            images_dir,
            layers_dir,
            csv_file,
            max_body_size,
            log_level,
        })
    }

    /// Config rooted at `root_dir` with the default directory layout.
    pub fn rooted_at(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            images_dir: root_dir.join("images"),
            layers_dir: root_dir.join("layers"),
            root_dir,
            csv_file: "user_inputs.csv".to_string(),
            max_body_size: 10 * 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
