use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use covenant_cli::{run_inspect, run_specialize, SpecializeConfig, LOG_ENV};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("covenant")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Specialize compiled covenant artifacts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("specialize")
                .about("Bind constructor inputs and write a new artifact")
                .arg(
                    Arg::new("artifact")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Artifact JSON to read"),
                )
                .arg(
                    Arg::new("bindings")
                        .long("bindings")
                        .short('b')
                        .value_parser(value_parser!(PathBuf))
                        .help("Bindings document (.json, .yaml or .yml)"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Where to write the specialized artifact"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Summarize an artifact")
                .arg(
                    Arg::new("artifact")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Artifact JSON to read"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn path_arg(args: &ArgMatches, id: &str) -> anyhow::Result<PathBuf> {
    args.get_one::<PathBuf>(id)
        .cloned()
        .with_context(|| format!("missing argument <{id}>"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("specialize", args)) => {
            let mut config = SpecializeConfig::new(path_arg(args, "artifact")?, path_arg(args, "out")?);
            if let Some(bindings) = args.get_one::<PathBuf>("bindings") {
                config = config.with_bindings(bindings);
            }
            let outcome = run_specialize(&config)?;
            println!("{outcome}");
        }
        Some(("inspect", args)) => {
            let report = run_inspect(&path_arg(args, "artifact")?)?;
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        _ => unreachable!("subcommand_required"),
    }
    Ok(())
}
