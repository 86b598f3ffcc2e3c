use derive_more::Constructor;
use itertools::Itertools;
use serde::Serialize;

use crate::core::io::matrix::MutationMatrix;
use crate::core::Error;

// Serialized field names define the CSV header of the results artifact
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneTotal {
    #[serde(rename = "Gene")]
    pub gene: String,
    #[serde(rename = "Total_Mutations")]
    pub total_mutations: i64,
}

#[derive(Constructor, Debug, Clone, Default, PartialEq, Eq)]
pub struct HotspotReport {
    hotspots: Vec<GeneTotal>,
}

impl HotspotReport {
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneTotal> {
        self.hotspots.iter()
    }

    pub fn top(&self) -> Option<&GeneTotal> {
        self.hotspots.first()
    }
}

fn total(matrix: &MutationMatrix, gene: usize) -> Result<f64, String> {
    let mut total = 0f64;
    for row in matrix.rows() {
        let cell = row[gene].trim();
        let value: f64 = cell.parse().map_err(|x| format!("{} (\"{}\")", x, cell))?;
        if !value.is_finite() {
            return Err(format!("\"{}\" is not a summable mutation count", cell));
        }
        total += value;
    }
    Ok(total)
}

pub fn compute(matrix: &MutationMatrix) -> Result<HotspotReport, Error> {
    let mut totals = Vec::with_capacity(matrix.genes().len());
    for (idx, gene) in matrix.genes().iter().enumerate() {
        let sum = total(matrix, idx).map_err(|cause| Error::Aggregate { gene: gene.clone(), cause })?;
        // Truncation toward zero first, then the cutoff: a gene summing to 0.9
        // is not a hotspot
        let sum = sum as i64;
        if sum > 0 {
            totals.push(GeneTotal { gene: gene.clone(), total_mutations: sum });
        }
    }

    // Stable sort: equal totals keep the matrix column order
    let hotspots = totals.into_iter().sorted_by(|a, b| b.total_mutations.cmp(&a.total_mutations)).collect_vec();
    Ok(HotspotReport { hotspots })
}
