use super::NoteBackend;
use crate::error::{NotesError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "notes.json";

pub struct FileBackend {
    root: PathBuf,
    data_file: String,
}

impl FileBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

impl NoteBackend for FileBackend {
    fn load(&self) -> Result<Vec<Note>> {
        let path = self.data_path();
        if !path.exists() {
            debug!(path = %path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(NotesError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let notes: Vec<Note> = serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        debug!(path = %path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_path();
        let content = serde_json::to_string_pretty(notes).map_err(NotesError::Serialization)?;

        // Write to a sibling temp file and rename so readers never see a partial file
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(NotesError::Io)?;
        fs::rename(&tmp_path, &path).map_err(NotesError::Io)?;

        debug!(path = %path.display(), count = notes.len(), "saved notes");
        Ok(())
    }
}
