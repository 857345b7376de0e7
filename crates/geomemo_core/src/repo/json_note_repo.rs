//! Single-file JSON note backend.
//!
//! The whole corpus is one JSON array, newest note first, which matches the
//! layout browser local storage used for offline notes.
//!
//! # Invariants
//! - A missing file is an empty corpus.
//! - Writes replace the file through a sibling temp file and rename.

use crate::model::note::Note;
use crate::repo::note_repo::{check_loaded, NoteRepository, StorageError, StorageResult};
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed note repository.
#[derive(Debug, Clone)]
pub struct JsonFileNoteRepository {
    path: PathBuf,
}

impl JsonFileNoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, notes: &[Note]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(notes)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload)?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }
}

impl NoteRepository for JsonFileNoteRepository {
    fn load_all(&self) -> StorageResult<Vec<Note>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let notes: Vec<Note> = serde_json::from_slice(&raw)?;
        for note in &notes {
            check_loaded(note)?;
        }
        Ok(notes)
    }

    fn append(&mut self, note: &Note) -> StorageResult<()> {
        let mut notes = self.load_all()?;
        if notes.iter().any(|existing| existing.id == note.id) {
            return Err(StorageError::DuplicateNote(note.id));
        }
        notes.insert(0, note.clone());
        self.write_all(&notes)?;

        info!(
            "event=note_append module=repo status=ok backend=json note_id={} corpus_size={}",
            note.id,
            notes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonFileNoteRepository;

    #[test]
    fn failed_rename_removes_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::create_dir(&path).unwrap();
        let repo = JsonFileNoteRepository::new(&path);

        assert!(repo.write_all(&[]).is_err());
        assert!(!dir.path().join("notes.json.tmp").exists());
    }
}
