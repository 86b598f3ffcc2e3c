use std::io::BufRead;
use std::path::Path;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use itertools::Itertools;

use crate::core::Error;

// Rows are samples, columns are genes. Cells stay raw text on purpose:
// numeric coercion happens in the aggregation step, so non-summable data
// surfaces as an aggregation failure rather than a load failure.
#[derive(Constructor, Getters, Dissolve, Debug, Clone, PartialEq, Eq)]
pub struct MutationMatrix {
    labels: Vec<String>,
    genes: Vec<String>,
    rows: Vec<Vec<String>>,
}

pub fn parse(reader: impl BufRead) -> Result<MutationMatrix, Error> {
    let parsefail = |x: csv::Error| Error::ParseMatrix { cause: x.to_string() };

    let mut reader = csv::ReaderBuilder::new().from_reader(reader);
    // First header field is the row-label column and carries no gene
    let genes: Vec<String> = reader.headers().map_err(parsefail)?.iter().skip(1).map(String::from).collect();
    if !genes.iter().all_unique() {
        return Err(Error::ParseMatrix { cause: "duplicate gene columns in the header".into() });
    }

    let (mut labels, mut rows) = (Vec::new(), Vec::new());
    for record in reader.records() {
        let record = record.map_err(parsefail)?;
        labels.push(record.get(0).unwrap_or_default().to_owned());
        rows.push(record.iter().skip(1).map(String::from).collect());
    }
    Ok(MutationMatrix { labels, genes, rows })
}

pub fn load(path: impl AsRef<Path>) -> Result<MutationMatrix, Error> {
    let path = path.as_ref();
    let reader =
        super::utils::open(path).map_err(|x| Error::ParseMatrix { cause: format!("{}: {}", path.display(), x) })?;
    parse(reader)
}
