use std::path::PathBuf;

use clap::Parser;

/// Terminal chat client for OpenAI chat models.
#[derive(Parser, Debug)]
#[command(name = "qabot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model preselected for /init (gpt-4, gpt-4o, gpt-3.5-turbo).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API key used by /init instead of prompting.
    #[arg(long, env = "QABOT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log filter directive override (e.g. "qabot=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "qabot",
            "--config",
            "/tmp/q.toml",
            "-m",
            "gpt-4o",
            "--log-level",
            "qabot=debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/q.toml")));
        assert_eq!(args.model.as_deref(), Some("gpt-4o"));
        assert_eq!(args.log_level.as_deref(), Some("qabot=debug"));
    }

    #[test]
    fn no_flags_is_valid() {
        let args = Args::try_parse_from(["qabot"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.model.is_none());
    }
}
