use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Port the resource server binds.
    /// Set via RESOURCE_API_PORT env var. Default: 8003.
    pub port: u16,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    Ok(Config {
        port: std::env::var("RESOURCE_API_PORT")
            .unwrap_or_else(|_| "8003".into())
            .parse()
            .unwrap_or(8003),
    })
}
