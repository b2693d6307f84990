//! CLI argument parsing

mod common;

use clap::Parser;

use crate::config::{defaults, env};

pub use common::OutputFormat;

/// Traffic Manager configuration inspector
#[derive(Parser, Debug)]
#[command(name = "vtmctl")]
#[command(version)]
#[command(about = "Inspect Traffic Manager configuration through its REST API", long_about = None)]
#[command(after_help = "Resource types: extra_files, license_keys, monitor_scripts, monitors, \
persistence, pools, rules, traffic_ip_groups (tip), traffic_managers, virtual_servers (vs)")]
pub struct Cli {
    /// Resource type (prompted for when omitted on a terminal)
    #[arg(short, long)]
    pub resource: Option<String>,

    /// `all` for a table of every instance, or an instance name for its raw configuration
    #[arg(short, long)]
    pub name: Option<String>,

    /// List the resource categories advertised by the appliance and exit
    #[arg(long, conflicts_with_all = ["resource", "name"])]
    pub list_api: bool,

    /// Appliance URL, e.g. https://vtm.example.com:9070
    #[arg(long, env = env::URL)]
    pub url: Option<String>,

    /// Basic auth username
    #[arg(short, long, env = env::USER)]
    pub user: Option<String>,

    /// Basic auth password
    #[arg(long, env = env::PASSWORD, hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification (self-signed appliance certificates)
    #[arg(short = 'k', long, env = env::INSECURE,
          value_parser = clap::builder::FalseyValueParser::new())]
    pub insecure: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit the header row in table and CSV output
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Maximum number of concurrent detail requests
    #[arg(short = 'j', long, default_value_t = defaults::CONCURRENCY)]
    pub concurrency: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, no interactive prompts
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["vtmctl", "--url", "https://vtm", "-u", "admin"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.output, OutputFormat::Table);
        assert_eq!(cli.concurrency, defaults::CONCURRENCY);
        assert!(!cli.no_header);
        assert!(!cli.batch);
        assert!(!cli.list_api);
        assert!(cli.resource.is_none());
        assert!(cli.name.is_none());
    }

    #[test]
    fn test_cli_resource_and_name() {
        let cli = Cli::parse_from(["vtmctl", "-r", "pools", "-n", "all"]);
        assert_eq!(cli.resource.as_deref(), Some("pools"));
        assert_eq!(cli.name.as_deref(), Some("all"));
    }

    #[test]
    fn test_cli_connection_flags() {
        let cli = Cli::parse_from([
            "vtmctl",
            "--url",
            "https://vtm.example.com:9070",
            "-u",
            "admin",
            "--password",
            "secret",
            "-k",
        ]);
        assert_eq!(cli.url.as_deref(), Some("https://vtm.example.com:9070"));
        assert_eq!(cli.user.as_deref(), Some("admin"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert!(cli.insecure);
    }

    #[test]
    fn test_cli_insecure_from_env() {
        // Only this test touches vtm_insecure; every value used here parses
        std::env::set_var(env::INSECURE, "1");
        let on = Cli::try_parse_from(["vtmctl"]).map(|c| c.insecure);

        std::env::set_var(env::INSECURE, "false");
        let off_false = Cli::try_parse_from(["vtmctl"]).map(|c| c.insecure);

        std::env::set_var(env::INSECURE, "0");
        let off_zero = Cli::try_parse_from(["vtmctl"]).map(|c| c.insecure);

        std::env::remove_var(env::INSECURE);

        assert!(on.unwrap());
        assert!(!off_false.unwrap());
        assert!(!off_zero.unwrap());
    }

    #[test]
    fn test_cli_output_options() {
        let cli = Cli::parse_from([
            "vtmctl", "-r", "vs", "-n", "all", "-o", "json", "--no-header", "-j", "1", "--batch",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.no_header);
        assert_eq!(cli.concurrency, 1);
        assert!(cli.batch);
    }

    #[test]
    fn test_cli_list_api_conflicts_with_resource() {
        let result = Cli::try_parse_from(["vtmctl", "--list-api", "-r", "pools"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_invalid_output_format() {
        let result = Cli::try_parse_from(["vtmctl", "-o", "xml"]);
        assert!(result.is_err());
    }
}
