use hackdir_core::grid::{GridGeometry, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use hackdir_core::projects::ProjectListingMode;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grid shape used when a request does not specify one (default: 4x3).
    pub grid: GridGeometry,
    /// Project listing mode used when a request does not specify one.
    pub project_listing_mode: ProjectListingMode,
    /// Quiet period before change events trigger a snapshot push (default: `250`).
    pub change_debounce_ms: u64,
    /// PostgreSQL connection string. Without it participants live in memory.
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `GRID_COLS`            | `4`                        |
    /// | `GRID_ROWS`            | `3`                        |
    /// | `PROJECT_LISTING_MODE` | `grouped`                  |
    /// | `CHANGE_DEBOUNCE_MS`   | `250`                      |
    /// | `DATABASE_URL`         | unset (in-memory store)    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let grid_cols: u32 = std::env::var("GRID_COLS")
            .unwrap_or_else(|_| DEFAULT_GRID_COLS.to_string())
            .parse()
            .expect("GRID_COLS must be a valid u32");

        let grid_rows: u32 = std::env::var("GRID_ROWS")
            .unwrap_or_else(|_| DEFAULT_GRID_ROWS.to_string())
            .parse()
            .expect("GRID_ROWS must be a valid u32");

        let grid = GridGeometry::new(grid_cols, grid_rows)
            .unwrap_or_else(|e| panic!("Invalid GRID_COLS/GRID_ROWS: {e}"));

        let project_listing_mode: ProjectListingMode = std::env::var("PROJECT_LISTING_MODE")
            .unwrap_or_else(|_| "grouped".into())
            .parse()
            .unwrap_or_else(|e| panic!("Invalid PROJECT_LISTING_MODE: {e}"));

        let change_debounce_ms: u64 = std::env::var("CHANGE_DEBOUNCE_MS")
            .unwrap_or_else(|_| "250".into())
            .parse()
            .expect("CHANGE_DEBOUNCE_MS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            grid,
            project_listing_mode,
            change_debounce_ms,
            database_url,
        }
    }
}
