//! Evidence codes attached to associations.

use oxrdf::NamedNodeRef;

/// Closed set of evidence codes an association can carry, mapped to
/// Evidence and Conclusion Ontology classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceCode {
    /// Manually curated assertion.
    ManualCuration,
    /// Text-mined, automatic assertion.
    TextMining,
    /// Similarity-based assertion.
    Similarity,
    /// Assertion derived from phenotypic similarity.
    PhenotypicSimilarity,
}

impl EvidenceCode {
    /// OBO class IRI for this code.
    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            EvidenceCode::ManualCuration => {
                NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/ECO_0000218")
            }
            EvidenceCode::TextMining => {
                NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/ECO_0007669")
            }
            EvidenceCode::Similarity => {
                NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/ECO_0000041")
            }
            EvidenceCode::PhenotypicSimilarity => {
                NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/ECO_0000053")
            }
        }
    }

    /// Derive the codes named by a free-text curation method field.
    /// Matching is by substring; text naming neither known method yields
    /// an empty set.
    pub fn from_method_text(text: &str) -> Vec<EvidenceCode> {
        let text = text.to_lowercase();
        let mut codes = Vec::new();
        if text.contains("text mining") {
            codes.push(EvidenceCode::TextMining);
        }
        if text.contains("manual curation") {
            codes.push(EvidenceCode::ManualCuration);
        }
        codes
    }
}
