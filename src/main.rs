use clap::{crate_name, crate_version, App, AppSettings};
use indicatif::ProgressBar;

use hotspot::cli;

fn main() {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about("Detects mutation hotspots - genes with the highest somatic mutation load - from a reference genome and a mutation matrix.")
        .max_term_width(120)
        .setting(AppSettings::DeriveDisplayOrder)
        .args(cli::args::all())
        .get_matches();

    let factory = || ProgressBar::new_spinner().with_style(cli::style::parse::with_progress());

    // Every load/aggregate failure collapses to a single user-visible message
    if let Err(e) = cli::run(&matches, factory) {
        eprintln!("Something went wrong: {}", e);
        std::process::exit(1);
    }
}
