use std::fs::File;
use std::io::BufWriter;

use clap::ArgMatches;
use indicatif::ProgressBar;

use crate::cli::{parse, resformat, style};
use crate::core::hotspots;
use crate::core::io::{fasta, matrix};
use crate::core::Error;

pub fn run(matches: &ArgMatches, factory: impl Fn() -> ProgressBar) -> Result<(), Error> {
    let genome = parse::genome(factory(), matches);
    let matrix = parse::matrix(factory(), matches);
    let saveto = parse::saveto(factory(), matches);

    // Both inputs are required to run; with either missing there is nothing
    // to do - no partial processing, no defaults, no error
    let (genome, matrix) = match (genome, matrix) {
        (Some(genome), Some(matrix)) => (genome, matrix),
        _ => {
            factory().finish_with_message(
                "Nothing to do: provide both the reference genome and the mutation matrix to detect hotspots.",
            );
            return Ok(());
        }
    };

    let pbar = factory();
    pbar.set_message("Loading the reference genome...");
    let reference = fasta::load(&genome)?;
    pbar.finish_with_message(format!("Loaded {} reference sequence(s) from {}", reference.len(), genome.display()));

    let pbar = factory();
    pbar.set_message("Loading the mutation matrix...");
    let matrix = matrix::load(&matrix)?;
    pbar.finish_with_message(format!(
        "Loaded mutation counts for {} sample(s) x {} gene(s)",
        matrix.labels().len(),
        matrix.genes().len()
    ));

    let pbar = factory();
    pbar.set_style(style::run::finished());
    pbar.set_message("Detecting hotspots...");
    let report = hotspots::compute(&matrix)?;

    // The artifact appears only after a successful aggregation
    let file = File::create(&saveto).map_err(|x| Error::Save { cause: format!("{}: {}", saveto.display(), x) })?;
    let mut writer = csv::WriterBuilder::new().from_writer(BufWriter::new(file));
    resformat::hotspots(&mut writer, &report).map_err(|x| Error::Save { cause: x.to_string() })?;

    match report.top() {
        Some(top) => pbar.finish_with_message(format!(
            "Detected {} hotspot(s); top gene {} with {} mutations. Results saved to {}",
            report.len(),
            top.gene,
            top.total_mutations,
            saveto.display()
        )),
        None => pbar.finish_with_message(format!("No hotspots detected. Results saved to {}", saveto.display())),
    }
    Ok(())
}
