use clap::Parser;
use std::io;
use std::process::ExitCode;
use audio_quality_checker::{
    cli::commands::InspectCli,
    init_logging,
    utils::reporting::Reporter,
    AudioError,
    TrackInspector,
};

fn main() -> ExitCode {
    init_logging();

    let cli = InspectCli::parse();

    let meta = match TrackInspector::inspect(&cli.file) {
        Ok(meta) => meta,
        Err(e @ (AudioError::PathNotFound(_) | AudioError::UnsupportedFormat(_))) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    if let Err(e) = Reporter::new().track_report(&mut stdout.lock(), &meta) {
        eprintln!("Error writing report: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
