//! In-memory triple buffer with serialize-and-clear semantics, plus the
//! sharded output writer that bounds graph memory for large inputs.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use oxrdf::{Graph, TripleRef};
use oxrdfxml::RdfXmlSerializer;
use tracing::info;

use crate::error::Result;

/// Accumulates the triples of one dataset run and writes them out as
/// RDF/XML. Serializing clears the buffer; nothing persists across
/// transformer invocations.
#[derive(Default)]
pub struct TripleStore {
    graph: Graph,
}

impl TripleStore {
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
        }
    }

    /// Assert a triple. Re-asserting an identical triple collapses.
    pub fn insert(&mut self, triple: TripleRef<'_>) {
        self.graph.insert(triple);
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Serialize the buffered graph to `path` as RDF/XML and clear it.
    /// Returns the number of triples written.
    pub fn serialize_to(&mut self, path: &Path) -> Result<usize> {
        let file = BufWriter::new(File::create(path)?);
        let mut writer = RdfXmlSerializer::new().for_writer(file);
        for triple in self.graph.iter() {
            writer.serialize_triple(triple)?;
        }
        writer.finish()?.into_inner().map_err(|e| e.into_error())?;

        let written = self.graph.len();
        self.graph = Graph::default();
        Ok(written)
    }
}

/// Owns output file naming and the periodic flush policy for one
/// dataset. Unbatched datasets write a single `<stem>.rdf`; batched
/// datasets write numbered `<stem>_<n>.rdf` shards every time the row
/// threshold is crossed, plus a final shard for the remainder.
pub struct ShardWriter {
    dir: PathBuf,
    stem: &'static str,
    flush_every: Option<usize>,
    rows_since_flush: usize,
    shard_index: usize,
    shards: Vec<PathBuf>,
    triples_written: usize,
}

/// What one transformer run wrote to disk.
#[derive(Debug)]
pub struct ShardReport {
    pub shards: Vec<PathBuf>,
    pub triples: usize,
}

impl ShardWriter {
    pub fn new(dir: &Path, stem: &'static str, flush_every: Option<usize>) -> Self {
        Self {
            dir: dir.to_path_buf(),
            stem,
            flush_every,
            rows_since_flush: 0,
            shard_index: 0,
            shards: Vec::new(),
            triples_written: 0,
        }
    }

    /// Count one processed input row, flushing the store when the
    /// configured row threshold is reached.
    pub fn row_done(&mut self, store: &mut TripleStore) -> Result<()> {
        self.rows_since_flush += 1;
        if let Some(every) = self.flush_every {
            if self.rows_since_flush >= every {
                self.flush(store)?;
            }
        }
        Ok(())
    }

    /// Final serialize-and-clear for whatever the loop left buffered.
    /// An empty remainder after at least one shard writes nothing.
    pub fn finish(mut self, store: &mut TripleStore) -> Result<ShardReport> {
        if !store.is_empty() || self.shards.is_empty() {
            self.flush(store)?;
        }
        Ok(ShardReport {
            shards: self.shards,
            triples: self.triples_written,
        })
    }

    fn flush(&mut self, store: &mut TripleStore) -> Result<()> {
        let path = self.next_path();
        let written = store.serialize_to(&path)?;
        info!(triples = written, path = %path.display(), "serialized graph");
        self.triples_written += written;
        self.shards.push(path);
        self.shard_index += 1;
        self.rows_since_flush = 0;
        Ok(())
    }

    fn next_path(&self) -> PathBuf {
        match self.flush_every {
            Some(_) => self.dir.join(format!("{}_{}.rdf", self.stem, self.shard_index)),
            None => self.dir.join(format!("{}.rdf", self.stem)),
        }
    }
}
