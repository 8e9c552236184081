use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "feed", about = "Build and print feed view states")]
pub struct Cli {
    /// RON configuration file.
    #[arg(long, default_value = "feed.ron")]
    pub config: PathBuf,

    /// Vertical to use; defaults to the first configured one.
    #[arg(long)]
    pub vertical: Option<String>,

    /// Log at debug level.
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Build the feed for one record key.
    Run { key: i64 },
    /// Build a synthetic feed with `count` users.
    Demo { count: usize },
    /// Probe a path on the stub network client.
    Ping { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_vertical() {
        let cli = Cli::parse_from(["feed", "--vertical", "feat11", "run", "7"]);
        assert_eq!(cli.vertical.as_deref(), Some("feat11"));
        assert_eq!(cli.config, PathBuf::from("feed.ron"));
        assert_eq!(cli.command, Command::Run { key: 7 });
    }

    #[test]
    fn parses_demo_and_ping() {
        let cli = Cli::parse_from(["feed", "--config", "x.ron", "demo", "3"]);
        assert_eq!(cli.command, Command::Demo { count: 3 });

        let cli = Cli::parse_from(["feed", "ping", "/health"]);
        assert_eq!(
            cli.command,
            Command::Ping {
                path: "/health".to_string()
            }
        );
    }
}
