/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Connection string for the document store. `None` runs the service without one.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            database_name: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|p| {
                    p.trim().parse::<u16>().map_err(|_| {
                        anyhow::anyhow!("PORT must be a valid number between 1-65535")
                    })
                })
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
        };

        // Presence only, values may carry credentials
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("DATABASE_URL set: {}", config.database_url_set());
        tracing::debug!("DATABASE_NAME set: {}", config.database_name_set());

        Ok(config)
    }

    pub fn database_url_set(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn database_name_set(&self) -> bool {
        self.database_name.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}
