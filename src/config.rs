use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};

pub const DEFAULT_PORT: u16 = 9999;
pub const DEFAULT_WORKERS: usize = 64;
pub const DEFAULT_TEMPLATE_PATH: &str = "/classic.html";

/// Paths served when `ALLOWED_PATHS` is not set.
pub const DEFAULT_ALLOWED_PATHS: &[&str] = &[
    "/index.html",
    "/spring.svg",
    "/spring.png",
    "/resources.html",
    "/styles.css",
    "/app.js",
    "/links.html",
    "/forms.html",
    "/classic.html",
    "/events.html",
    "/events.js",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub public_dir: PathBuf,
    pub allowed_paths: Vec<String>,
    pub template_path: Option<String>,
    pub io_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            public_dir: PathBuf::from("./public"),
            allowed_paths: DEFAULT_ALLOWED_PATHS.iter().map(|p| p.to_string()).collect(),
            template_path: Some(DEFAULT_TEMPLATE_PATH.to_string()),
            io_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(host) = lookup("HOST") {
            cfg.host = host;
        }
        if let Some(port) = parse_var(&lookup, "PORT")? {
            cfg.port = port;
        }
        if let Some(workers) = parse_var(&lookup, "WORKERS")? {
            cfg.workers = workers;
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            cfg.public_dir = PathBuf::from(dir);
        }
        if let Some(paths) = lookup("ALLOWED_PATHS") {
            cfg.allowed_paths = paths
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(template) = lookup("TEMPLATE_PATH") {
            let template = template.trim();
            cfg.template_path = (!template.is_empty()).then(|| template.to_string());
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "IO_TIMEOUT_SECS")? {
            cfg.io_timeout = Duration::from_secs(secs);
        }

        if cfg.workers == 0 {
            bail!("WORKERS must be at least 1");
        }

        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}
