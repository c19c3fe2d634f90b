use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::{Corpus, TrainingExample};
use crate::RecognizerError;

/// Snapshot format version written by [`JsonFileStore`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Persists a corpus between runs.
///
/// Implementations must be safe for concurrent use.
/// Use [`MemoryStore`] for testing/ephemeral use.
pub trait CorpusStore: Send + Sync {
    /// Loads the stored corpus. An absent store yields an empty corpus.
    fn load(&self) -> Result<Corpus, RecognizerError>;

    /// Replaces the stored corpus.
    fn save(&self, corpus: &Corpus) -> Result<(), RecognizerError>;
}

/// In-memory [`CorpusStore`]. Data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    examples: Mutex<Vec<TrainingExample>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CorpusStore for MemoryStore {
    fn load(&self) -> Result<Corpus, RecognizerError> {
        let examples = self.examples.lock().map_err(|_| poisoned())?;
        Ok(Corpus::from_examples(examples.iter().cloned()))
    }

    fn save(&self, corpus: &Corpus) -> Result<(), RecognizerError> {
        let mut examples = self.examples.lock().map_err(|_| poisoned())?;
        *examples = corpus.examples().to_vec();
        Ok(())
    }
}

fn poisoned() -> RecognizerError {
    RecognizerError::Store("memory store lock poisoned".into())
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    examples: &'a [TrainingExample],
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    examples: Vec<TrainingExample>,
}

/// [`CorpusStore`] backed by a JSON file:
///
/// ```text
/// {"version":1,"examples":[{"label":"one","sequence":[[0.1,0.2],...]},...]}
/// ```
///
/// Label counts are not stored; they are rebuilt on load.
/// Saves write a uniquely named temp file in the same directory and rename
/// it over the target, so concurrent saves never share a temp file and a
/// reader sees either the old or the new snapshot. The last save wins.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, e: std::io::Error) -> RecognizerError {
        RecognizerError::Store(format!("{}: {}", self.path.display(), e))
    }
}

impl CorpusStore for JsonFileStore {
    fn load(&self) -> Result<Corpus, RecognizerError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store: no corpus file, starting empty");
                return Ok(Corpus::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        let snap: Snapshot = serde_json::from_str(&content)
            .map_err(|e| RecognizerError::Store(format!("{}: {}", self.path.display(), e)))?;
        if snap.version != SNAPSHOT_VERSION {
            return Err(RecognizerError::Store(format!(
                "{}: unsupported snapshot version {}",
                self.path.display(),
                snap.version
            )));
        }

        let corpus = Corpus::from_examples(snap.examples);
        debug!(path = %self.path.display(), examples = corpus.len(), "store: corpus loaded");
        Ok(corpus)
    }

    fn save(&self, corpus: &Corpus) -> Result<(), RecognizerError> {
        let dir = match self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
                dir
            }
            None => Path::new("."),
        };

        let snap = SnapshotRef {
            version: SNAPSHOT_VERSION,
            examples: corpus.examples(),
        };
        let data = serde_json::to_vec(&snap).map_err(|e| RecognizerError::Store(e.to_string()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.io_err(e))?;
        tmp.write_all(&data).map_err(|e| self.io_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_err(e.error))?;

        debug!(path = %self.path.display(), examples = corpus.len(), "store: corpus saved");
        Ok(())
    }
}
