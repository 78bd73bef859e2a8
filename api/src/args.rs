use clap::Parser;
use inspeksi_core::domain::common::{AuthConfig, DatabaseConfig, InspeksiConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "inspeksi-api", about = "Facility inspection tracking API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every API route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "inspeksi")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    /// HS256 secret shared with the session authority issuing bearer tokens.
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for InspeksiConfig {
    fn from(args: Args) -> Self {
        InspeksiConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.username,
                password: args.db.password,
                name: args.db.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
            },
        }
    }
}
