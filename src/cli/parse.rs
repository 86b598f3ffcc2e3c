use std::path::PathBuf;

use clap::ArgMatches;
use indicatif::ProgressBar;

use super::args;

pub fn genome(pbar: ProgressBar, matches: &ArgMatches) -> Option<PathBuf> {
    pbar.set_message("Parsing path to the reference genome...");
    match matches.value_of(args::core::GENOME) {
        Some(x) => {
            let result = PathBuf::from(x);
            pbar.finish_with_message(format!("Reference genome: {}", result.display()));
            Some(result)
        }
        None => {
            pbar.finish_with_message("Reference genome is not provided.");
            None
        }
    }
}

pub fn matrix(pbar: ProgressBar, matches: &ArgMatches) -> Option<PathBuf> {
    pbar.set_message("Parsing path to the mutation matrix...");
    match matches.value_of(args::core::MATRIX) {
        Some(x) => {
            let result = PathBuf::from(x);
            pbar.finish_with_message(format!("Mutation matrix: {}", result.display()));
            Some(result)
        }
        None => {
            pbar.finish_with_message("Mutation matrix is not provided.");
            None
        }
    }
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> PathBuf {
    pbar.set_message("Parsing output path...");
    // The path is not opened here: the file must appear only after a
    // successful run
    let result: PathBuf = matches.value_of(args::core::SAVETO).unwrap().into();
    pbar.finish_with_message(format!("Results will be saved to {}", result.display()));
    result
}
