//! Reified association and provenance node construction.

use chrono::NaiveDate;
use oxrdf::vocab::rdf;
use oxrdf::{Literal, NamedNode, TripleRef};
use uuid::Uuid;

use crate::error::Result;
use crate::evidence::EvidenceCode;
use crate::store::TripleStore;
use crate::vocab::{dc, obo, pheno, PHENO_NS};

/// Mint a fresh reified association stating `subject` has-phenotype
/// `object`.
///
/// Four triples are asserted on the new node: its rdf:Statement type and
/// the subject, predicate, and object of the wrapped assertion. Evidence
/// and provenance are attached separately against the returned handle.
/// Identifier uniqueness rests on the UUID space; collisions are not
/// handled.
pub fn create_association(
    store: &mut TripleStore,
    subject: &NamedNode,
    object: &NamedNode,
) -> Result<NamedNode> {
    let association = mint_node()?;
    store.insert(TripleRef::new(&association, rdf::TYPE, rdf::STATEMENT));
    store.insert(TripleRef::new(&association, rdf::SUBJECT, subject));
    store.insert(TripleRef::new(&association, rdf::PREDICATE, obo::HAS_PHENOTYPE));
    store.insert(TripleRef::new(&association, rdf::OBJECT, object));
    Ok(association)
}

/// Attach one evidence code to an association via "has evidence".
pub fn attach_evidence(store: &mut TripleStore, association: &NamedNode, code: EvidenceCode) {
    store.insert(TripleRef::new(association, obo::HAS_EVIDENCE, code.iri()));
}

/// Optional provenance attributes for one association. Absent attributes
/// produce no triples.
#[derive(Debug, Clone, Default)]
pub struct Provenance<'a> {
    pub creator: Option<&'a str>,
    pub created_on: Option<NaiveDate>,
    pub source: Option<&'a str>,
}

/// Mint a provenance node, assert only the attributes actually present,
/// and link it to `association` via "has provenance". Returns the new
/// node.
pub fn attach_provenance(
    store: &mut TripleStore,
    association: &NamedNode,
    provenance: &Provenance<'_>,
) -> Result<NamedNode> {
    let node = mint_node()?;
    store.insert(TripleRef::new(&node, rdf::TYPE, pheno::PROVENANCE));

    if let Some(creator) = provenance.creator.filter(|c| !c.is_empty()) {
        let literal = Literal::new_simple_literal(creator);
        store.insert(TripleRef::new(&node, dc::CREATOR, &literal));
    }
    if let Some(date) = provenance.created_on {
        let literal = Literal::new_simple_literal(date.format("%Y-%m-%d").to_string());
        store.insert(TripleRef::new(&node, dc::DATE, &literal));
    }
    if let Some(source) = provenance.source.filter(|s| !s.is_empty()) {
        let literal = Literal::new_simple_literal(source);
        store.insert(TripleRef::new(&node, dc::SOURCE, &literal));
    }

    store.insert(TripleRef::new(association, pheno::HAS_PROVENANCE, &node));
    Ok(node)
}

fn mint_node() -> Result<NamedNode> {
    Ok(NamedNode::new(format!("{}{}", PHENO_NS, Uuid::new_v4()))?)
}
