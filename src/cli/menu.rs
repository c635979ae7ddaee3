use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use crate::analyzers::aggregate::QualityAnalyzer;
use crate::utils::reporting::Reporter;

pub fn run_detailed(out: &mut impl Write, root: &Path) -> io::Result<()> {
    let files = QualityAnalyzer::analyze(root);
    Reporter::new().detailed_report(out, &files)
}

pub fn run_summary(out: &mut impl Write, root: &Path) -> io::Result<()> {
    let files = QualityAnalyzer::analyze(root);
    Reporter::new().summary_report(out, &files)
}

/// Folder report for a user-supplied path; a missing folder is reported, not scanned.
pub fn run_folder(out: &mut impl Write, folder: &Path) -> io::Result<()> {
    if !folder.exists() {
        writeln!(out, "Folder '{}' does not exist!", folder.display())?;
        return Ok(());
    }

    let files = QualityAnalyzer::analyze(folder);
    Reporter::new().folder_report(out, folder, &files)
}

// Typed answer to the menu's folder prompt.
fn run_folder_prompt(out: &mut impl Write, answer: &str) -> io::Result<()> {
    let answer = answer.trim();
    if answer.is_empty() {
        writeln!(out, "No folder specified!")?;
        return Ok(());
    }
    run_folder(out, Path::new(answer))
}

/// Interactive numbered menu. Loops until `4` or end of input.
pub struct Menu<R, W> {
    root: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(root: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            root: root.into(),
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Audio Quality Checker")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "Check bitrate and quality of your audio files")?;

        loop {
            writeln!(self.output, "\nOptions:")?;
            writeln!(self.output, "1. Check all audio files (detailed report)")?;
            writeln!(self.output, "2. Quick quality check (summary only)")?;
            writeln!(self.output, "3. Check specific folder")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("\nChoose option (1/2/3/4): ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => run_detailed(&mut self.output, &self.root)?,
                "2" => run_summary(&mut self.output, &self.root)?,
                "3" => {
                    let folder = self.prompt("Enter folder path to check: ")?.unwrap_or_default();
                    run_folder_prompt(&mut self.output, &folder)?;
                }
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice! Please enter 1, 2, 3, or 4.")?,
            }
        }
    }

    // None at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
