use std::io::BufRead;

use crate::core::hotspots::{self, HotspotReport};
use crate::core::io::{fasta, matrix};
use crate::core::Error;

// One call per submitted pair of inputs: load -> aggregate, no state kept.
pub fn detect(genome: impl BufRead, matrix: impl BufRead) -> Result<HotspotReport, Error> {
    // The reference genome is only validated. The ranking is defined purely
    // by the mutation matrix; sequences are never consulted.
    fasta::parse(genome)?;

    let matrix = matrix::parse(matrix)?;
    hotspots::compute(&matrix)
}
