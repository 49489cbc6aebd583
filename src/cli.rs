use clap::Parser;

/// Command line interface for the relay server
#[derive(Parser, Debug)]
#[command(name = "webhook-relay", about = "Relays chat completions to a workflow webhook")]
pub struct Cli {
    /// Optional TOML configuration file; environment variables override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address the HTTP server binds to
    #[arg(long, default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    /// Port the HTTP server listens on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to daily rotating files under ./logs
    #[arg(long)]
    pub log_file: bool,
}
