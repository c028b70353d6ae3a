use std::fs;
use std::io::BufReader;
use std::path::Path;

use anyhow::Result;
use oxrdf::vocab::rdf;
use oxrdf::{Graph, NamedNode, SubjectRef, TermRef};
use oxrdfxml::RdfXmlParser;
use tempfile::tempdir;

use phenodb_transformer::constants;
use phenodb_transformer::datasets::{
    DatasetTransformer, Disease2Phenotype, Drug2Phenotype, GenePredictive2Phenotype,
    GeneTextMined2Phenotype, Mondo2Phenotype, Pathogen2Phenotype, TransformContext,
};
use phenodb_transformer::vocab::{dc, obo, pheno};

fn parse_graph(path: &Path) -> Graph {
    let file = BufReader::new(fs::File::open(path).unwrap());
    let mut graph = Graph::default();
    for triple in RdfXmlParser::new().for_reader(file) {
        graph.insert(&triple.unwrap());
    }
    graph
}

fn subject_iri(subject: SubjectRef<'_>) -> Option<String> {
    match subject {
        SubjectRef::NamedNode(n) => Some(n.as_str().to_string()),
        _ => None,
    }
}

fn term_iri(term: TermRef<'_>) -> Option<String> {
    match term {
        TermRef::NamedNode(n) => Some(n.as_str().to_string()),
        _ => None,
    }
}

fn term_literal(term: TermRef<'_>) -> Option<String> {
    match term {
        TermRef::Literal(l) => Some(l.value().to_string()),
        _ => None,
    }
}

/// The association node whose rdf:subject points at `subject_iri_str`.
fn association_for(graph: &Graph, subject_iri_str: &str) -> NamedNode {
    graph
        .iter()
        .find_map(|t| {
            if t.predicate == rdf::SUBJECT && term_iri(t.object).as_deref() == Some(subject_iri_str)
            {
                subject_iri(t.subject).map(|iri| NamedNode::new(iri).unwrap())
            } else {
                None
            }
        })
        .expect("association for subject")
}

fn count_with_subject_and_predicate(graph: &Graph, node: &NamedNode, predicate: &str) -> usize {
    graph
        .iter()
        .filter(|t| {
            subject_iri(t.subject).as_deref() == Some(node.as_str())
                && t.predicate.as_str() == predicate
        })
        .count()
}

fn association_count(graph: &Graph) -> usize {
    graph.iter().filter(|t| t.predicate == rdf::SUBJECT).count()
}

#[test]
fn disease_rows_become_reified_associations() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join(constants::DISEASE_INPUT),
        "DOID:123\tHP:0000716\nDOID:234\tHP:0001945\n\tHP:0000002\n",
    )?;

    let ctx = TransformContext::new(dir.path().to_path_buf());
    let summary = Disease2Phenotype::new().run(&ctx)?;

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.associations, 2);
    assert_eq!(summary.outputs.len(), 1);

    let graph = parse_graph(&summary.outputs[0]);
    // Round trip: the re-parsed file carries the logged triple count.
    assert_eq!(graph.len(), summary.triples);

    let disease = "http://phenodb.phenomebrowser.net/DOID_123";
    let phenotype = "http://phenodb.phenomebrowser.net/HP_0000716";
    let association = association_for(&graph, disease);

    // The four core triples of the reified statement.
    let core: Vec<(String, Option<String>)> = graph
        .iter()
        .filter(|t| subject_iri(t.subject).as_deref() == Some(association.as_str()))
        .map(|t| (t.predicate.as_str().to_string(), term_iri(t.object)))
        .collect();
    assert!(core.contains(&(
        rdf::TYPE.as_str().to_string(),
        Some(rdf::STATEMENT.as_str().to_string())
    )));
    assert!(core.contains(&(rdf::SUBJECT.as_str().to_string(), Some(disease.to_string()))));
    assert!(core.contains(&(
        rdf::PREDICATE.as_str().to_string(),
        Some(obo::HAS_PHENOTYPE.as_str().to_string())
    )));
    assert!(core.contains(&(rdf::OBJECT.as_str().to_string(), Some(phenotype.to_string()))));

    // One text-mining evidence code.
    assert_eq!(
        count_with_subject_and_predicate(&graph, &association, obo::HAS_EVIDENCE.as_str()),
        1
    );
    let evidence = graph
        .iter()
        .find(|t| {
            subject_iri(t.subject).as_deref() == Some(association.as_str())
                && t.predicate == obo::HAS_EVIDENCE
        })
        .and_then(|t| term_iri(t.object))
        .unwrap();
    assert_eq!(evidence, "http://purl.obolibrary.org/obo/ECO_0007669");

    // Exactly one provenance node, carrying the dataset constants.
    assert_eq!(
        count_with_subject_and_predicate(&graph, &association, pheno::HAS_PROVENANCE.as_str()),
        1
    );
    let provenance = graph
        .iter()
        .find(|t| {
            subject_iri(t.subject).as_deref() == Some(association.as_str())
                && t.predicate == pheno::HAS_PROVENANCE
        })
        .and_then(|t| term_iri(t.object))
        .map(|iri| NamedNode::new(iri).unwrap())
        .unwrap();

    let attribute = |predicate: &str| {
        graph
            .iter()
            .find(|t| {
                subject_iri(t.subject).as_deref() == Some(provenance.as_str())
                    && t.predicate.as_str() == predicate
            })
            .and_then(|t| term_literal(t.object))
    };
    assert_eq!(
        attribute(dc::CREATOR.as_str()).as_deref(),
        Some("Sara Althubaiti")
    );
    assert_eq!(attribute(dc::DATE.as_str()).as_deref(), Some("2018-11-07"));
    assert!(attribute(dc::SOURCE.as_str()).is_some());

    Ok(())
}

#[test]
fn flush_threshold_produces_numbered_shards() -> Result<()> {
    let dir = tempdir()?;
    let rows: String = (0..11)
        .map(|i| format!("{}\tHP:{:07}\t0.5\n", 1000 + i, i))
        .collect();
    fs::write(dir.path().join(constants::GENE_PREDICTIVE_INPUT), rows)?;

    let ctx = TransformContext::new(dir.path().to_path_buf());
    // Eleven rows at flush-every-3 means shards of 3, 3, 3 and a final 2.
    let summary = GenePredictive2Phenotype::new(3).run(&ctx)?;

    assert_eq!(summary.rows, 11);
    assert_eq!(summary.associations, 11);
    assert_eq!(summary.outputs.len(), 4);
    for (index, output) in summary.outputs.iter().enumerate() {
        assert_eq!(
            output.file_name().unwrap().to_str().unwrap(),
            format!("{}_{}.rdf", constants::GENE_PREDICTIVE_DATASET, index)
        );
    }

    let counts: Vec<usize> = summary
        .outputs
        .iter()
        .map(|path| association_count(&parse_graph(path)))
        .collect();
    assert_eq!(counts, vec![3, 3, 3, 2]);

    // Every shard is self-contained and the totals match what was logged.
    let total: usize = summary
        .outputs
        .iter()
        .map(|path| parse_graph(path).len())
        .sum();
    assert_eq!(total, summary.triples);

    Ok(())
}

#[test]
fn two_thresholds_plus_remainder_yield_three_shards() -> Result<()> {
    let dir = tempdir()?;
    let n: usize = 8;
    let rows: String = (0..(2 * n + 5))
        .map(|i| format!("{}\tHP:{:07}\t0.5\n", 2000 + i, i))
        .collect();
    fs::write(dir.path().join(constants::GENE_PREDICTIVE_INPUT), rows)?;

    let ctx = TransformContext::new(dir.path().to_path_buf());
    let summary = GenePredictive2Phenotype::new(n).run(&ctx)?;

    assert_eq!(summary.outputs.len(), 3);
    let counts: Vec<usize> = summary
        .outputs
        .iter()
        .map(|path| association_count(&parse_graph(path)))
        .collect();
    assert_eq!(counts, vec![n, n, 5]);

    Ok(())
}

#[test]
fn pathogen_method_text_drives_evidence() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join(constants::PATHOGEN_INPUT),
        r#"[
            {
                "TaxID": "http://purl.obolibrary.org/obo/NCBITaxon_5833",
                "Diseases": [{"name": "malaria", "method": "text mining, manual curation"}],
                "Phenotypes": [{"id": "HP:0001945"}, {"id": "HP:0012735"}]
            },
            {
                "TaxID": "NCBITaxon:1280",
                "Diseases": [{"name": "abscess", "method": ""}],
                "Phenotypes": [{"id": "<http://purl.obolibrary.org/obo/HP_0025439>"}]
            }
        ]"#,
    )?;

    let ctx = TransformContext::new(dir.path().to_path_buf());
    let summary = Pathogen2Phenotype::new().run(&ctx)?;

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.associations, 3);

    let graph = parse_graph(&summary.outputs[0]);
    assert_eq!(graph.len(), summary.triples);

    // Both evidence codes on every phenotype of the first pathogen. The
    // two associations share a pathogen subject, so resolve each through
    // its rdf:object instead.
    for phenotype in [
        "http://purl.obolibrary.org/obo/HP_0001945",
        "http://purl.obolibrary.org/obo/HP_0012735",
    ] {
        let association = graph
            .iter()
            .find_map(|t| {
                if t.predicate == rdf::OBJECT && term_iri(t.object).as_deref() == Some(phenotype) {
                    subject_iri(t.subject).map(|iri| NamedNode::new(iri).unwrap())
                } else {
                    None
                }
            })
            .unwrap();
        assert_eq!(
            count_with_subject_and_predicate(&graph, &association, obo::HAS_EVIDENCE.as_str()),
            2
        );
        let pathogen_subject = graph
            .iter()
            .find(|t| {
                subject_iri(t.subject).as_deref() == Some(association.as_str())
                    && t.predicate == rdf::SUBJECT
            })
            .and_then(|t| term_iri(t.object))
            .unwrap();
        assert_eq!(
            pathogen_subject,
            "http://purl.obolibrary.org/obo/NCBITaxon_5833"
        );
    }

    // No evidence triples for the pathogen whose method text is empty.
    let bare = graph
        .iter()
        .find_map(|t| {
            if t.predicate == rdf::OBJECT
                && term_iri(t.object).as_deref()
                    == Some("http://purl.obolibrary.org/obo/HP_0025439")
            {
                subject_iri(t.subject).map(|iri| NamedNode::new(iri).unwrap())
            } else {
                None
            }
        })
        .unwrap();
    assert_eq!(
        count_with_subject_and_predicate(&graph, &bare, obo::HAS_EVIDENCE.as_str()),
        0
    );
    // Provenance is still attached.
    assert_eq!(
        count_with_subject_and_predicate(&graph, &bare, pheno::HAS_PROVENANCE.as_str()),
        1
    );

    Ok(())
}

#[test]
fn drug_identifiers_are_rewritten() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join(constants::DRUG_INPUT),
        "CID000000085 <http://purl.obolibrary.org/obo/HP_0000716>\n",
    )?;

    let ctx = TransformContext::new(dir.path().to_path_buf());
    let summary = Drug2Phenotype::new().run(&ctx)?;
    assert_eq!(summary.associations, 1);

    let graph = parse_graph(&summary.outputs[0]);
    let association =
        association_for(&graph, "https://pubchem.ncbi.nlm.nih.gov/compound/000000085");
    let object = graph
        .iter()
        .find(|t| {
            subject_iri(t.subject).as_deref() == Some(association.as_str())
                && t.predicate == rdf::OBJECT
        })
        .and_then(|t| term_iri(t.object))
        .unwrap();
    assert_eq!(object, "http://purl.obolibrary.org/obo/HP_0000716");

    Ok(())
}

#[test]
fn textmined_row_emits_one_association_per_subject() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join(constants::GENE_TEXTMINED_INPUT),
        "MGI:97490\t5080_#_18508\tMP:0001943\t0.42\nnan\t2033\tMP:0002169\t0.11\n",
    )?;

    let ctx = TransformContext::new(dir.path().to_path_buf());
    let summary = GeneTextMined2Phenotype::new(0).run(&ctx)?;

    assert_eq!(summary.rows, 2);
    // Three subjects on the first row, one on the second.
    assert_eq!(summary.associations, 4);
    // Unbatched because the threshold is disabled.
    assert_eq!(summary.outputs.len(), 1);
    assert_eq!(
        summary.outputs[0].file_name().unwrap().to_str().unwrap(),
        format!("{}.rdf", constants::GENE_TEXTMINED_DATASET)
    );

    let graph = parse_graph(&summary.outputs[0]);
    let phenotype = "http://phenodb.phenomebrowser.net/MP_0001943";
    let subjects: Vec<String> = graph
        .iter()
        .filter(|t| t.predicate == rdf::OBJECT && term_iri(t.object).as_deref() == Some(phenotype))
        .filter_map(|t| subject_iri(t.subject))
        .collect();
    assert_eq!(subjects.len(), 3);

    let subject_iris: Vec<String> = subjects
        .iter()
        .map(|association| {
            graph
                .iter()
                .find(|t| {
                    subject_iri(t.subject).as_deref() == Some(association.as_str())
                        && t.predicate == rdf::SUBJECT
                })
                .and_then(|t| term_iri(t.object))
                .unwrap()
        })
        .collect();
    assert!(subject_iris.contains(&"http://www.informatics.jax.org/marker/MGI:97490".to_string()));
    assert!(subject_iris.contains(&"https://www.ncbi.nlm.nih.gov/gene/5080".to_string()));
    assert!(subject_iris.contains(&"https://www.ncbi.nlm.nih.gov/gene/18508".to_string()));

    Ok(())
}

#[test]
fn mondo_header_is_skipped() -> Result<()> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join(constants::MONDO_INPUT),
        "mondo_id\thp_id\nMONDO:0005015\tHP:0003074\n",
    )?;

    let ctx = TransformContext::new(dir.path().to_path_buf());
    let summary = Mondo2Phenotype::new().run(&ctx)?;

    assert_eq!(summary.rows, 1);
    assert_eq!(summary.associations, 1);

    let graph = parse_graph(&summary.outputs[0]);
    let association = association_for(&graph, "http://phenodb.phenomebrowser.net/MONDO_0005015");
    let evidence = graph
        .iter()
        .find(|t| {
            subject_iri(t.subject).as_deref() == Some(association.as_str())
                && t.predicate == obo::HAS_EVIDENCE
        })
        .and_then(|t| term_iri(t.object))
        .unwrap();
    assert_eq!(evidence, "http://purl.obolibrary.org/obo/ECO_0000218");

    Ok(())
}

#[test]
fn malformed_rows_and_missing_inputs_abort_the_run() {
    let dir = tempdir().unwrap();
    let ctx = TransformContext::new(dir.path().to_path_buf());

    // Missing input file.
    assert!(Disease2Phenotype::new().run(&ctx).is_err());

    // Wrong column count.
    fs::write(
        dir.path().join(constants::DISEASE_INPUT),
        "DOID:123\tHP:0000716\textra\n",
    )
    .unwrap();
    let err = Disease2Phenotype::new().run(&ctx).unwrap_err();
    assert!(err.to_string().contains("malformed row"));
}
