//! Command-line interface
//!
//! Flags override values from the config file so a single run can point at
//! a different question source or use a fixed seed.

use std::path::PathBuf;

use clap::Parser;
use libquiz::config::Config;
use libquiz::logging::{LogFormat, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "quiz-tui")]
#[command(version, about = "Timed trivia sessions in the terminal", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/quizcast/config.toml)
    #[arg(short, long, env = "QUIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Question server endpoint
    #[arg(long)]
    pub url: Option<String>,

    /// Local JSON question pool (wins over --url)
    #[arg(long)]
    pub file: Option<String>,

    /// Countdown seconds granted per question
    #[arg(long)]
    pub seconds_per_question: Option<u32>,

    /// Fixed shuffle seed for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log output format (text, json or pretty)
    #[arg(long, env = "QUIZ_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "QUIZ_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file and apply flag overrides
    pub fn load_config(&self) -> libquiz::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };

        if let Some(url) = &self.url {
            config.source.url = url.clone();
            config.source.file = None;
        }
        if let Some(file) = &self.file {
            config.source.file = Some(file.clone());
        }
        if let Some(seconds) = self.seconds_per_question {
            config.session.seconds_per_question = seconds;
        }
        if self.seed.is_some() {
            config.session.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    /// Logging setup for this run
    ///
    /// Only errors reach stderr while the terminal is in use. A log file
    /// gets info level and up.
    pub fn logging(&self) -> LoggingConfig {
        match &self.log_file {
            Some(path) => LoggingConfig::new(self.log_format, "info".to_string(), self.verbose)
                .with_file(path),
            None => LoggingConfig::new(self.log_format, "error".to_string(), self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["quiz-tui"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nfile = \"/tmp/pool.json\"\n[session]\nseconds_per_question = 20"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = parse(&[
            "--config",
            &path,
            "--url",
            "http://quiz.example/q",
            "--seconds-per-question",
            "5",
            "--seed",
            "7",
        ]);
        let config = cli.load_config().unwrap();

        assert_eq!(config.source.url, "http://quiz.example/q");
        assert_eq!(config.source.file, None);
        assert_eq!(config.session.seconds_per_question, 5);
        assert_eq!(config.session.seed, Some(7));
    }

    #[test]
    fn test_zero_seconds_flag_rejected() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = parse(&["--config", &path, "--seconds-per-question", "0"]);
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_log_format_flag() {
        let cli = parse(&["--log-format", "json", "--log-file", "/tmp/quiz.log"]);
        let logging = cli.logging();
        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(logging.level, "info");
        assert_eq!(logging.file, Some(PathBuf::from("/tmp/quiz.log")));
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let result = Cli::try_parse_from(["quiz-tui", "--log-format", "xml"]);
        assert!(result.is_err());
    }
}
