use clap::Parser;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use webloc_report::cli::args::{Args, Command, InitArgs, ScanArgs};
use webloc_report::config::{load_config, Config, EnvConfig};
use webloc_report::output::text::Console;
use webloc_report::scanner::ReportEngine;

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Some(Command::Scan(scan_args)) => run_scan(scan_args),
        Some(Command::Init(init_args)) => run_init(&init_args),
        // Default: scan current directory
        None => run_scan(ScanArgs::default()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("webloc_report={}", level)));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_scan(args: ScanArgs) -> ExitCode {
    init_logging(args.verbose);

    let env = EnvConfig::load();
    let config = if args.no_config {
        Config::default()
    } else {
        let explicit = args.config.clone().or_else(|| env.config_path.clone());
        load_config(explicit.as_deref(), Path::new("."))
    };
    let config = args.apply(config, &env);

    let mut console = Console::stdout(config.output.color, config.output.progress);
    let engine = ReportEngine::from_config(&config);

    match engine.run(&args.path, &mut console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run_init(args: &InitArgs) -> ExitCode {
    if args.output.exists() && !args.force {
        eprintln!(
            "Error: {} already exists. Use --force to overwrite.",
            args.output.display()
        );
        return ExitCode::from(1);
    }

    let config = if args.full {
        Config::full()
    } else {
        Config::minimal()
    };

    match config.to_yaml() {
        Ok(yaml) => {
            if let Err(e) = fs::write(&args.output, &yaml) {
                eprintln!("Error writing config: {}", e);
                return ExitCode::from(2);
            }
            println!("Created {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating config: {}", e);
            ExitCode::from(2)
        }
    }
}
