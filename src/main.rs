use clap::Parser;
use std::io;
use std::process::ExitCode;
use audio_quality_checker::{
    analyzers::aggregate::QualityAnalyzer,
    cli::{
        commands::{Cli, Commands},
        menu::{self, Menu},
    },
    init_logging,
    utils::parallel::ParallelProcessor,
};

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    QualityAnalyzer::init_parallel_processing(cli.jobs);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        None => {
            let stdin = io::stdin();
            Menu::new(&cli.root, stdin.lock(), &mut out).run()
        }
        Some(Commands::Detailed) => menu::run_detailed(&mut out, &cli.root),
        Some(Commands::Summary) => menu::run_summary(&mut out, &cli.root),
        Some(Commands::Folder { dir }) => menu::run_folder(&mut out, &dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing report: {}", e);
            ExitCode::FAILURE
        }
    }
}
