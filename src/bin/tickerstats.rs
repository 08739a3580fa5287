use tickerstats::config::{Config, API_KEY_ENV};
use tickerstats::report;
use tickerstats::services::analysis_service::AnalysisService;
use tickerstats::sources::base::{DatasetQuery, DatasetSource};
use tickerstats::sources::file::FileSource;
use tickerstats::sources::nasdaq::NasdaqDataLinkSource;
use tickerstats::{loader, util};

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches, SubCommand};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger, info by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = App::new("TickerStats")
        .version("1.0.0")
        .author("EgoStrategy Team")
        .about("Daily trading statistics for a single equity dataset")
        .subcommand(
            SubCommand::with_name("analyze")
                .about("Fetch a dataset and compute its summary statistics")
                .arg(
                    Arg::with_name("database")
                        .long("database")
                        .value_name("DATABASE")
                        .help("Database code, e.g. FSE")
                        .takes_value(true)
                        .default_value("FSE"),
                )
                .arg(
                    Arg::with_name("dataset")
                        .short('t')
                        .long("dataset")
                        .value_name("TICKER")
                        .help("Dataset (ticker) code, e.g. AFX_X")
                        .takes_value(true)
                        .default_value("AFX_X"),
                )
                .arg(
                    Arg::with_name("year")
                        .short('y')
                        .long("year")
                        .value_name("YEAR")
                        .help("Analyse one calendar year")
                        .takes_value(true)
                        .conflicts_with_all(&["start", "end"]),
                )
                .arg(
                    Arg::with_name("start")
                        .long("start")
                        .value_name("DATE")
                        .help("Start date (YYYY-MM-DD, inclusive)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("end")
                        .long("end")
                        .value_name("DATE")
                        .help("End date (YYYY-MM-DD, inclusive)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("api-key")
                        .long("api-key")
                        .value_name("KEY")
                        .help("API key; falls back to NASDAQ_DATA_LINK_API_KEY")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("base-url")
                        .long("base-url")
                        .value_name("URL")
                        .help("Override the API base URL")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("file")
                        .short('f')
                        .long("file")
                        .value_name("PATH")
                        .help("Read a saved data.json response instead of calling the API")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("inspect")
                .about("Show the records of a saved data.json response")
                .arg(
                    Arg::with_name("file")
                        .short('f')
                        .long("file")
                        .value_name("PATH")
                        .help("Saved data.json response")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("limit")
                        .short('l')
                        .long("limit")
                        .value_name("LIMIT")
                        .help("Limit the number of records to display")
                        .takes_value(true)
                        .default_value("10"),
                ),
        );

    let matches = app.get_matches();

    if let Some(matches) = matches.subcommand_matches("analyze") {
        analyze(matches).await?;
    } else if let Some(matches) = matches.subcommand_matches("inspect") {
        inspect(matches).await?;
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}

fn build_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::new()
        .with_database(matches.value_of("database").unwrap_or("FSE"))
        .with_dataset(matches.value_of("dataset").unwrap_or("AFX_X"));

    if let Some(year) = matches.value_of("year") {
        let year = year.parse::<i32>().context("invalid --year")?;
        config = config.date_range_for_year(year)?;
    } else {
        let start = matches.value_of("start").map(util::parse_iso_date).transpose()?;
        let end = matches.value_of("end").map(util::parse_iso_date).transpose()?;
        config = config.with_date_range(start, end);
    }

    // 命令行参数优先，其次环境变量
    let api_key = matches
        .value_of("api-key")
        .map(str::to_string)
        .or_else(|| std::env::var(API_KEY_ENV).ok());
    if let Some(key) = api_key {
        config = config.with_api_key(&key);
    }
    if let Some(url) = matches.value_of("base-url") {
        config = config.with_base_url(url);
    }

    Ok(config)
}

async fn analyze(matches: &ArgMatches) -> Result<()> {
    let config = build_config(matches)?;

    let source: Arc<dyn DatasetSource + Send + Sync> = match matches.value_of("file") {
        Some(path) => Arc::new(FileSource::new(path)),
        None => Arc::new(
            NasdaqDataLinkSource::new(&config)
                .with_context(|| format!("set --api-key or {}", API_KEY_ENV))?,
        ),
    };

    let code = DatasetQuery::from_config(&config).code();
    let service = AnalysisService::new(config, source);
    let summary = service.analyze().await?;

    info!("{:-<60}", "");
    for line in report::summary_lines(&code, &summary) {
        info!("{}", line);
    }
    info!("{:-<60}", "");

    Ok(())
}

fn parse_limit(value: &str) -> Result<usize> {
    value.parse::<usize>().context("invalid --limit")
}

async fn inspect(matches: &ArgMatches) -> Result<()> {
    let path = matches.value_of("file").context("--file is required")?;
    let limit = parse_limit(matches.value_of("limit").unwrap_or("10"))?;

    let query = DatasetQuery::from_config(&Config::new());
    let dataset = FileSource::new(path).fetch_dataset(&query).await?;
    info!("Columns: {}", dataset.column_names.join(", "));

    let series = loader::load_dataset(&dataset)?;
    info!("{}", report::record_header());
    info!("{:-<60}", "");
    for record in series.iter().take(limit) {
        info!("{}", report::record_line(record));
    }

    if series.len() > limit {
        info!("... and {} more records", series.len() - limit);
    } else if series.is_empty() {
        info!("No records in {}", path);
    }

    Ok(())
}
