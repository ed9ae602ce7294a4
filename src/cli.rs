//! Command line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "userscope",
    about = "Browse randomly generated user profiles, grouped by country",
    version
)]
pub struct Cli {
    /// Number of users to request per batch
    #[arg(short, long)]
    pub results: Option<u32>,

    /// Base URL of the user generation endpoint
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Overlay the flags onto a loaded configuration. Flags win over file
    /// values; absent flags leave the configuration untouched.
    pub fn apply(&self, config: &mut Config) {
        if let Some(results) = self.results {
            config.api.results = results;
        }
        if let Some(endpoint) = &self.endpoint {
            config.api.base_url = endpoint.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_flags_leave_config_untouched() {
        let cli = Cli::parse_from(["userscope"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.api.base_url, "https://randomuser.me/api");
        assert_eq!(config.api.results, 100);
    }

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::parse_from([
            "userscope",
            "--results",
            "25",
            "--endpoint",
            "http://localhost:9000/api",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.api.results, 25);
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn rejects_non_numeric_results() {
        assert!(Cli::try_parse_from(["userscope", "--results", "many"]).is_err());
    }
}
