use thiserror::Error;

// All failure modes collapse to one user-visible message at the outer
// boundary; the variants tag where processing stopped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read the reference genome: {cause}")]
    ParseGenome { cause: String },

    #[error("failed to read the mutation matrix: {cause}")]
    ParseMatrix { cause: String },

    #[error("failed to aggregate mutation counts for gene \"{gene}\": {cause}")]
    Aggregate { gene: String, cause: String },

    #[error("failed to save the results: {cause}")]
    Save { cause: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        for (error, expected) in [
            (
                Error::ParseGenome { cause: "no such file".into() },
                "failed to read the reference genome: no such file",
            ),
            (
                Error::Aggregate { gene: "TP53".into(), cause: "invalid float literal (\"NA\")".into() },
                "failed to aggregate mutation counts for gene \"TP53\": invalid float literal (\"NA\")",
            ),
        ] {
            assert_eq!(error.to_string(), expected);
        }
    }
}
