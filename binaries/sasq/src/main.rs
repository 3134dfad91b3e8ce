mod cmd;

use {
    clap::{arg, value_parser, Arg, ArgMatches, Command},
    cmd::Error as ExecutionError,
    executor::QueryRequest,
    snafu::prelude::*,
    std::{env, io, path::PathBuf, process},
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "the `{}` environment variable is unset, pass the dataset path as an argument instead",
        SASQ_DATASET
    ))]
    NoDataset,

    #[snafu(display("{}", source))]
    ExecuteCommand {
        #[snafu(backtrace)]
        source: ExecutionError,
    },

    #[snafu(display("failed to write output: {}", source))]
    Output { source: serde_json::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

const SASQ_DATASET: &str = "SASQ_DATASET";

const LOAD: &str = "load";
const METADATA: &str = "metadata";
const DATA: &str = "data";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .subcommand(
            Command::new(LOAD)
                .about("load the dataset and report its metadata")
                .arg(arg!([PATH] "dataset file").value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new(METADATA)
                .about("print the dataset's columns and row count")
                .arg(arg!([PATH] "dataset file").value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new(DATA)
                .about("print one page of filtered rows")
                .arg(arg!([PATH] "dataset file").value_parser(value_parser!(PathBuf)))
                .arg(
                    arg!(--start <N> "first filtered row of the page")
                        .value_parser(value_parser!(usize))
                        .default_value("0"),
                )
                .arg(
                    arg!(--rows <N> "page size")
                        .value_parser(value_parser!(usize))
                        .default_value("100"),
                )
                .arg(
                    arg!(--vars <COLUMNS> "comma separated columns to return")
                        .value_delimiter(','),
                )
                .arg(
                    Arg::new("where")
                        .long("where")
                        .value_name("CLAUSE")
                        .help("WHERE clause, e.g. AGE > 30 AND SEX = 'F'"),
                ),
        )
}

fn main() {
    init_tracing();

    if let Err(err) = try_main() {
        println!("{}", serde_json::json!({ "error": err.to_string() }));
        process::exit(2);
    }
}

/// Logs go to stderr so stdout only ever carries JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();

    let output = match matches.subcommand() {
        Some((LOAD, sub_matches)) => {
            let path = dataset_path(sub_matches)?;

            cmd::load(&path).context(ExecuteCommandSnafu)?
        }
        Some((METADATA, sub_matches)) => {
            let path = dataset_path(sub_matches)?;

            cmd::metadata(&path).context(ExecuteCommandSnafu)?
        }
        Some((DATA, sub_matches)) => {
            let path = dataset_path(sub_matches)?;

            let request = QueryRequest {
                filter: sub_matches.get_one::<String>("where").cloned(),
                columns: sub_matches
                    .get_many::<String>("vars")
                    .map(|vars| vars.map(|v| v.trim().to_string()).collect()),
                start_row: sub_matches.get_one::<usize>("start").copied().unwrap_or(0),
                page_size: sub_matches
                    .get_one::<usize>("rows")
                    .copied()
                    .unwrap_or(executor::DEFAULT_PAGE_SIZE),
            };

            cmd::data(&path, request).context(ExecuteCommandSnafu)?
        }
        _ => unreachable!(),
    };

    serde_json::to_writer_pretty(io::stdout().lock(), &output).context(OutputSnafu)?;
    println!();

    Ok(())
}

fn dataset_path(matches: &ArgMatches) -> Result<PathBuf> {
    match matches.get_one::<PathBuf>("PATH") {
        Some(path) => Ok(path.clone()),
        None => env::var_os(SASQ_DATASET)
            .map(PathBuf::from)
            .context(NoDatasetSnafu),
    }
}
