use std::path::PathBuf;

use recommender_core::catalogue::Catalogue;
use recommender_core::recommender::DEFAULT_TOP_K;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// Every variable is optional. Without any of them the server uses the
/// built-in catalogue and serves MCP on stdio.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalogue file replacing the built-in catalogue.
    pub catalogue_path: Option<PathBuf>,
    /// Number of recommendations returned when a request omits `top_k`.
    pub default_top_k: usize,
    /// Address for the JSON HTTP API (e.g. "0.0.0.0:8000").
    pub http_listen_addr: Option<String>,
    /// Address for MCP over TCP. Takes effect only when HTTP is not configured.
    pub mcp_tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `CATALOGUE_PATH`
    /// - `DEFAULT_TOP_K` (default: 5, must be >= 1)
    /// - `HTTP_LISTEN_ADDR`
    /// - `MCP_TCP_LISTEN_ADDR`
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalogue_path = non_blank("CATALOGUE_PATH").map(PathBuf::from);
        if let Some(path) = &catalogue_path {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "catalogue file not found: {}",
                    path.display()
                )));
            }
        }

        let default_top_k = match non_blank("DEFAULT_TOP_K") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&k| k > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "DEFAULT_TOP_K must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_TOP_K,
        };

        Ok(Self {
            catalogue_path,
            default_top_k,
            http_listen_addr: non_blank("HTTP_LISTEN_ADDR"),
            mcp_tcp_listen_addr: non_blank("MCP_TCP_LISTEN_ADDR"),
        })
    }

    pub fn load_catalogue(&self) -> Result<Catalogue, AppError> {
        let catalogue = match &self.catalogue_path {
            Some(path) => Catalogue::from_path(path)?,
            None => Catalogue::builtin()?,
        };
        Ok(catalogue)
    }
}
