//! Runtime configuration from flags, environment and `.env`.

use clap::Parser;
use dotenv::dotenv;
use std::path::Path;

#[derive(Parser, Debug, Clone)]
#[command(name = "cyber-kittens")]
#[command(about = "Authenticated kitten ownership API")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "KITTENS_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: String,

    /// SQLite database path (`:memory:` for an ephemeral database)
    #[arg(long, env = "DATABASE_PATH", default_value = "cyber_kittens.db")]
    pub database_path: String,

    /// HMAC secret for bearer tokens. Without it every token check fails.
    #[arg(long, env = "SIGNING_SECRET", hide_env_values = true)]
    pub signing_secret: Option<String>,

    /// Token lifetime in hours (1..=8760)
    #[arg(long, env = "TOKEN_TTL_HOURS", default_value = "24", value_parser = clap::value_parser!(i64).range(1..=8760))]
    pub token_ttl_hours: i64,

    /// bcrypt work factor (4..=31)
    #[arg(long, env = "BCRYPT_COST", default_value = "10", value_parser = clap::value_parser!(u32).range(4..=31))]
    pub bcrypt_cost: u32,
}

/// Load `.env` from the working directory (and parents), then the crate root.
pub fn load_env() {
    let _ = dotenv();

    let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    if manifest_env.exists() {
        let _ = dotenv::from_path(&manifest_env);
    }
}
