//! Fixed namespace and vocabulary bindings used when constructing resources.

use oxrdf::NamedNode;

use crate::error::Result;

/// Base IRI of the phenodb namespace; minted associations and provenance
/// nodes live here alongside disease/phenotype resources.
pub const PHENO_NS: &str = "http://phenodb.phenomebrowser.net/";
/// Base IRI for OBO ontology terms (relations, evidence codes, taxa).
pub const OBO_NS: &str = "http://purl.obolibrary.org/obo/";
/// PubChem compound pages, suffixed with the bare CID.
pub const PUBCHEM_NS: &str = "https://pubchem.ncbi.nlm.nih.gov/compound/";
/// MGI marker pages.
pub const MGI_NS: &str = "http://www.informatics.jax.org/marker/";
/// NCBI Entrez gene pages.
pub const ENTREZ_GENE_NS: &str = "https://www.ncbi.nlm.nih.gov/gene/";

/// phenodb classes and properties.
pub mod pheno {
    use oxrdf::NamedNodeRef;

    pub const PROVENANCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://phenodb.phenomebrowser.net/Provenance");
    pub const HAS_PROVENANCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://phenodb.phenomebrowser.net/hasProvenance");
}

/// OBO Relations Ontology properties.
pub mod obo {
    use oxrdf::NamedNodeRef;

    /// has phenotype
    pub const HAS_PHENOTYPE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/RO_0002200");
    /// has evidence
    pub const HAS_EVIDENCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/RO_0002558");
}

/// Dublin Core element properties carried by provenance nodes.
pub mod dc {
    use oxrdf::NamedNodeRef;

    pub const CREATOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/creator");
    pub const DATE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/date");
    pub const SOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/source");
}

/// A namespace that mints resources by appending a local name.
#[derive(Debug, Clone, Copy)]
pub struct Namespace(&'static str);

impl Namespace {
    pub fn resource(&self, local: &str) -> Result<NamedNode> {
        Ok(NamedNode::new(format!("{}{}", self.0, local))?)
    }
}

/// The fixed set of namespaces used for identifier construction,
/// constructed once at startup and handed to every transformer.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub pheno: Namespace,
    pub obo: Namespace,
    pub pubchem: Namespace,
    pub mgi: Namespace,
    pub gene: Namespace,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            pheno: Namespace(PHENO_NS),
            obo: Namespace(OBO_NS),
            pubchem: Namespace(PUBCHEM_NS),
            mgi: Namespace(MGI_NS),
            gene: Namespace(ENTREZ_GENE_NS),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
