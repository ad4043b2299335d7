//! Handling of the command line interface
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use crate::{
    analyzers::AnalyzerType,
    error::{ParaxResult, ParaxialError},
};
use clap::Parser;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Command line arguments for the paraxial analysis application.
#[derive(Debug)]
pub struct Args {
    /// file path of the prescription, which should be read in
    pub file_path: PathBuf,

    /// analyzers that should be run (in this order)
    pub analyzers: Vec<AnalyzerType>,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PartialArgs {
    /// file path of the lens prescription (.yaml)
    #[arg(short, long)]
    file_path: Option<String>,

    /// analyzer to be used: raytrace, cardinal, stop or all
    #[arg(short, long, default_value = "all")]
    analyzer: String,
}

/// Checks if the passed file path is valid.
///
/// The path must point to an existing file with a `.yaml` or `.yml` extension.
fn file_path_is_valid(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

fn eval_file_path_input(file_path: &str) -> Option<PathBuf> {
    let path = PathBuf::from(file_path);
    file_path_is_valid(&path).then_some(path)
}

/// Evaluates the analyzer string.
///
/// `all` selects every available analyzer. Unknown analyzer names result in [`None`].
fn eval_analyzer_input(analyzer_input: &str) -> Option<Vec<AnalyzerType>> {
    if analyzer_input == "all" {
        Some(AnalyzerType::iter().collect())
    } else {
        analyzer_input.parse::<AnalyzerType>().ok().map(|a| vec![a])
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = ParaxialError;

    fn try_from(part_args: PartialArgs) -> ParaxResult<Self> {
        let file_path = part_args
            .file_path
            .ok_or_else(|| ParaxialError::Console("no prescription file given".into()))?;
        let file_path = eval_file_path_input(&file_path).ok_or_else(|| {
            ParaxialError::Console(format!(
                "invalid prescription file path: {file_path} (must be an existing .yaml file)"
            ))
        })?;
        let analyzers = eval_analyzer_input(&part_args.analyzer).ok_or_else(|| {
            ParaxialError::Console(format!(
                "invalid analyzer: {} (use raytrace, cardinal, stop or all)",
                part_args.analyzer
            ))
        })?;
        Ok(Self {
            file_path,
            analyzers,
        })
    }
}
