use clap::Parser;
use std::io;
use std::process::ExitCode;
use tag_cloud::config::Args;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = args
        .resolve(&mut stdin.lock(), &mut stdout)
        .and_then(|config| tag_cloud::run(&config));

    match result {
        Ok(summary) => {
            tracing::debug!(
                distinct = summary.distinct_words,
                selected = summary.selected_words,
                "done"
            );
            println!("Completed!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
