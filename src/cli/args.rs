use clap::Arg;

use super::validate;

pub mod core {
    use super::*;

    pub const GENOME: &str = "genome";
    pub const MATRIX: &str = "matrix";
    pub const SAVETO: &str = "saveto";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(GENOME)
                .short('g')
                .long(GENOME)
                .takes_value(true)
                .validator(validate::path)
                .long_help(
                    "Path to the reference genome in the FASTA format (.fna/.fasta, optionally gzip-compressed). \
                     The file is parsed and validated; hotspot totals are computed from the mutation matrix alone.",
                ),
            Arg::new(MATRIX)
                .short('m')
                .long(MATRIX)
                .takes_value(true)
                .validator(validate::path)
                .long_help(
                    "Path to the mutation matrix in the CSV format (optionally gzip-compressed). The first column \
                     is a row label (e.g. a sample name); every other column is a gene with numeric mutation counts. \
                     Hotspots are detected only when both the genome and the matrix are provided.",
                ),
            Arg::new(SAVETO)
                .short('o')
                .long(SAVETO)
                .takes_value(true)
                .validator(validate::writable)
                .default_value("HotspotResults.csv")
                .long_help(
                    "Path to the output CSV file with the ranked hotspots (header Gene,Total_Mutations). \
                     The file is written only after a successful run.",
                ),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    core::args()
}
