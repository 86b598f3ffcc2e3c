use std::io::Write;

use csv::Writer;

use crate::core::hotspots::HotspotReport;

pub fn hotspots<W: Write>(saveto: &mut Writer<W>, report: &HotspotReport) -> csv::Result<()> {
    // Serialization emits the header from the first record; an empty report
    // still must produce a valid one-table artifact
    if report.is_empty() {
        saveto.write_record(["Gene", "Total_Mutations"])?;
    }
    for gene in report.iter() {
        saveto.serialize(gene)?;
    }
    saveto.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use serde_test::{assert_ser_tokens, Token};

    use crate::core::hotspots::GeneTotal;

    use super::*;

    fn gt(gene: &str, total_mutations: i64) -> GeneTotal {
        GeneTotal { gene: gene.to_string(), total_mutations }
    }

    fn formatted(report: &HotspotReport) -> String {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
        hotspots(&mut writer, report).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn tokens() {
        assert_ser_tokens(
            &gt("BRCA1", 15),
            &[
                Token::Struct { name: "GeneTotal", len: 2 },
                Token::Str("Gene"),
                Token::Str("BRCA1"),
                Token::Str("Total_Mutations"),
                Token::I64(15),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn ranked() {
        let report = HotspotReport::new(vec![gt("BRCA1", 15), gt("TP53", 3)]);
        assert_eq!(formatted(&report), "Gene,Total_Mutations\nBRCA1,15\nTP53,3\n");
    }

    #[test]
    fn empty() {
        assert_eq!(formatted(&HotspotReport::default()), "Gene,Total_Mutations\n");
    }

    #[test]
    fn roundtrip() {
        let report = HotspotReport::new(vec![gt("BRCA1", 15), gt("TP53", 3), gt("KRAS", 3)]);

        let binding = formatted(&report);
        let mut reader = csv::ReaderBuilder::new().from_reader(binding.as_bytes());
        assert_eq!(reader.headers().unwrap().iter().collect::<Vec<_>>(), vec!["Gene", "Total_Mutations"]);

        let reparsed: Vec<GeneTotal> = reader
            .records()
            .map(|x| {
                let x = x.unwrap();
                gt(x.get(0).unwrap(), x.get(1).unwrap().parse().unwrap())
            })
            .collect();
        assert_eq!(reparsed, report.iter().cloned().collect::<Vec<_>>());
    }
}
