use std::path::PathBuf;

use static_init::dynamic;

#[dynamic]
pub static RESOURCES: PathBuf = PathBuf::from(file!()).parent().unwrap().join("resources");

pub mod genome {
    use super::*;

    #[dynamic]
    pub static FASTA: String = RESOURCES.join("genome.fna").to_str().unwrap().to_string();

    #[dynamic]
    pub static FASTA_GZ: String = RESOURCES.join("genome.fna.gz").to_str().unwrap().to_string();
}

pub mod matrix {
    use super::*;

    #[dynamic]
    pub static CSV: String = RESOURCES.join("matrix.csv").to_str().unwrap().to_string();

    #[dynamic]
    pub static CSV_GZ: String = RESOURCES.join("matrix.csv.gz").to_str().unwrap().to_string();

    #[dynamic]
    pub static NONNUMERIC: String = RESOURCES.join("matrix_nonnumeric.csv").to_str().unwrap().to_string();

    #[dynamic]
    pub static EMPTY: String = RESOURCES.join("matrix_empty.csv").to_str().unwrap().to_string();
}

pub mod expected {
    use super::*;

    #[dynamic]
    pub static FOLDER: PathBuf = RESOURCES.join("expected");

    #[dynamic]
    pub static HOTSPOTS: PathBuf = FOLDER.join("hotspots.csv");

    #[dynamic]
    pub static EMPTY: PathBuf = FOLDER.join("empty.csv");
}
