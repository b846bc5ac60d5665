use anyhow::{anyhow, Result};
use clap::Parser;
use coogle::cli::{Cli, FormatArg};
use coogle::commands::search::{search_project, SearchConfig};
use coogle::core::Language;
use coogle::io::output::{create_writer, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = SearchConfig {
        path: cli.path,
        pattern: cli.pattern,
        languages: parse_languages(cli.languages.as_deref())?,
        ignore_patterns: cli.ignore_patterns,
        parallel: !cli.no_parallel,
    };

    let results = search_project(&config)?;

    let format = match cli.format {
        FormatArg::Terminal => OutputFormat::Terminal,
        FormatArg::Json => OutputFormat::Json,
    };
    let mut writer = create_writer(format, cli.output.as_deref())?;
    writer.write_results(&results)?;

    // grep convention: non-zero exit when nothing matched
    if results.matches.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn parse_languages(names: Option<&[String]>) -> Result<Vec<Language>> {
    match names {
        None => Ok(vec![Language::C, Language::Cpp]),
        Some(names) => names
            .iter()
            .map(|name| {
                Language::from_name(name).ok_or_else(|| anyhow!("unknown language `{name}`"))
            })
            .collect(),
    }
}
