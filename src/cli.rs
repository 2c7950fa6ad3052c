use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="runsum",
          version=&**FULL_VERSION,
          about="Finds maximal running-sum spans in position-annotated scores",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Find spans in a score table")]
    Find(FindArgs),
    #[clap(about = "Check a score table without searching it")]
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("find")))]
#[command(arg_required_else_help(true))]
pub struct FindArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "scores")]
    #[clap(help = "Score table: 'position value' or 'contig position value' per line, optionally gzipped")]
    #[clap(value_name = "SCORES")]
    #[arg(value_parser = check_file_exists)]
    pub scores_path: PathBuf,

    #[clap(short = 'p')]
    #[clap(long = "penalty")]
    #[clap(help = "Separation penalty per unit of distance between adjacent positions")]
    #[clap(value_name = "PENALTY")]
    #[clap(default_value = "0")]
    #[arg(value_parser = ensure_non_negative_float)]
    pub separation_penalty: f64,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output table path [default: stdout]")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: Option<PathBuf>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "min-score")]
    #[clap(value_name = "SCORE")]
    #[clap(help = "Only report spans scoring above this value")]
    #[clap(default_value = "0")]
    #[arg(value_parser = ensure_finite_float)]
    pub min_score: f64,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("validate")))]
#[command(arg_required_else_help(true))]
pub struct ValidateArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "scores")]
    #[clap(help = "Score table: 'position value' or 'contig position value' per line, optionally gzipped")]
    #[clap(value_name = "SCORES")]
    #[arg(value_parser = check_file_exists)]
    pub scores_path: PathBuf,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_output_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn ensure_finite_float(s: &str) -> Result<f64> {
    let value = s
        .parse::<f64>()
        .map_err(|e| format!("Could not parse float: {}", e))?;
    if !value.is_finite() {
        Err(format!("The value must be finite, got: {}", value))
    } else {
        Ok(value)
    }
}

fn ensure_non_negative_float(s: &str) -> Result<f64> {
    let value = ensure_finite_float(s)?;
    if value < 0.0 {
        Err(format!("The value must be non-negative, got: {}", value))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_parser() {
        assert_eq!(ensure_non_negative_float("0.25"), Ok(0.25));
        assert_eq!(ensure_non_negative_float("0"), Ok(0.0));
        assert_eq!(
            ensure_non_negative_float("-1"),
            Err("The value must be non-negative, got: -1".to_string())
        );
        assert_eq!(
            ensure_non_negative_float("inf"),
            Err("The value must be finite, got: inf".to_string())
        );
        assert!(ensure_non_negative_float("abc").is_err());
    }

    #[test]
    fn output_path_parent_must_exist() {
        assert!(check_output_path("spans.tsv").is_ok());
        assert_eq!(
            check_output_path("/nonexistent/dir/spans.tsv"),
            Err("Path does not exist: /nonexistent/dir".to_string())
        );
    }

    #[test]
    fn parse_find_command() {
        let dir = tempfile::tempdir().unwrap();
        let scores = dir.path().join("scores.tsv");
        std::fs::write(&scores, "1 1\n").unwrap();
        let cli = Cli::try_parse_from([
            "runsum",
            "-vv",
            "find",
            "-i",
            scores.to_str().unwrap(),
            "-p",
            "0.01",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Command::Find(args) => {
                assert_eq!(args.scores_path, scores);
                assert_eq!(args.separation_penalty, 0.01);
                assert_eq!(args.output_path, None);
                assert_eq!(args.min_score, 0.0);
            }
            Command::Validate(_) => panic!("expected find"),
        }
    }

    #[test]
    fn negative_penalty_rejected_by_cli() {
        let dir = tempfile::tempdir().unwrap();
        let scores = dir.path().join("scores.tsv");
        std::fs::write(&scores, "1 1\n").unwrap();
        let parsed = Cli::try_parse_from([
            "runsum",
            "find",
            "-i",
            scores.to_str().unwrap(),
            "--penalty=-2",
        ]);
        assert!(parsed.is_err());
    }
}
