// Reconstruction of Shamir-shared secrets from JSON test cases.
//
// Each file holds a `keys` object with `n` and `k` and the shares "1" to "n",
// each share being a value written in a numeral base. Files are processed
// independently: a failing file is reported and the next one is processed.

use std::{env, error::Error, process::exit};

use console::style;
use shamir::{Reconstruct, TestCase};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILES: [&str; 2] = ["testcase1.json", "testcase2.json"];

fn print_notice_and_exit(error: Option<String>) {
    println!(
        "{} Shamir secret reconstruction from JSON test cases",
        style("  overview:").magenta().bold()
    );
    println!(
        "{} reconstruct [-h] [--help] [--quiet] [<file.json>...]",
        style("     usage:").magenta().bold()
    );
    println!(
        "{} without {}, reads {} and {}",
        style("  defaults:").magenta().bold(),
        style("files").blue(),
        style(DEFAULT_FILES[0]).blue(),
        style(DEFAULT_FILES[1]).blue(),
    );
    if let Some(error) = error {
        println!("{} {}", style("     error:").red().bold(), error);
    }
    exit(0);
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Print help if requested
    if args.contains(&"-h".to_string()) || args.contains(&"--help".to_string()) {
        print_notice_and_exit(None)
    }

    let mut quiet = false;
    let mut files = vec![];
    for arg in &args {
        if arg == "--quiet" {
            quiet = true
        } else if arg.starts_with("--") {
            print_notice_and_exit(Some(format!("Unrecognized argument: {arg}")))
        } else {
            files.push(arg.clone())
        }
    }
    if files.is_empty() {
        files = DEFAULT_FILES.iter().map(|f| f.to_string()).collect();
    }

    // RUST_LOG takes precedence over the default level
    let default_level = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;

    info!(files = files.len(), "reconstructing secrets");

    for (i, file) in files.iter().enumerate() {
        match TestCase::from_path(file).and_then(|case| case.reconstruct()) {
            Ok(secret) => println!("Constant term for TestCase {}: {}", i + 1, secret),
            Err(e) => eprintln!(
                "{} {}: {}",
                style("Input error:").red().bold(),
                file,
                e
            ),
        }
    }

    Ok(())
}
