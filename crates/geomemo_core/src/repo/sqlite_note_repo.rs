//! SQLite note backend.
//!
//! # Invariants
//! - Notes are read newest-first by insertion order (`seq DESC`); a
//!   backdated `created_at` does not move a note.
//! - A note row and its tag rows are written in one transaction.
//! - Tags are stored in extraction order and read back in that order.

use crate::model::coordinate::Coordinate;
use crate::model::note::Note;
use crate::repo::note_repo::{check_loaded, NoteRepository, StorageError, StorageResult};
use log::info;
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::collections::HashMap;
use uuid::Uuid;

const REQUIRED_TABLES: [&str; 2] = ["notes", "note_tags"];

/// SQLite-backed note repository over a migrated connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Wraps a connection returned by [`open_db`](crate::db::open_db).
    ///
    /// Fails when the note schema is absent.
    pub fn try_new(conn: &'conn mut Connection) -> StorageResult<Self> {
        for table in REQUIRED_TABLES {
            if !table_exists(conn, table)? {
                return Err(StorageError::MissingTable(table));
            }
        }
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn load_all(&self) -> StorageResult<Vec<Note>> {
        let mut tags_by_note = load_all_tags(self.conn)?;
        let mut stmt = self.conn.prepare(
            "SELECT id, text, created_at, author_id, lat, lng
             FROM notes
             ORDER BY seq DESC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            let tags = tags_by_note.remove(&id_text).unwrap_or_default();
            let note = parse_note_row(row, &id_text, tags)?;
            check_loaded(&note)?;
            notes.push(note);
        }
        Ok(notes)
    }

    fn append(&mut self, note: &Note) -> StorageResult<()> {
        let id_text = note.id.to_string();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: i64 = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?1);",
            [id_text.as_str()],
            |row| row.get(0),
        )?;
        if exists == 1 {
            return Err(StorageError::DuplicateNote(note.id));
        }

        tx.execute(
            "INSERT INTO notes (id, text, created_at, author_id, lat, lng)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                id_text.as_str(),
                note.text.as_str(),
                note.created_at,
                note.author_id.as_deref(),
                note.location.lat,
                note.location.lng,
            ],
        )?;
        for (position, tag) in note.tags.iter().enumerate() {
            tx.execute(
                "INSERT INTO note_tags (note_id, position, tag) VALUES (?1, ?2, ?3);",
                params![id_text.as_str(), position as i64, tag.as_str()],
            )?;
        }
        tx.commit()?;

        info!(
            "event=note_append module=repo status=ok backend=sqlite note_id={} tags={}",
            note.id,
            note.tags.len()
        );
        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>, id_text: &str, tags: Vec<String>) -> StorageResult<Note> {
    let id = Uuid::parse_str(id_text).map_err(|_| {
        StorageError::InvalidData(format!("invalid uuid value `{id_text}` in notes.id"))
    })?;
    Ok(Note {
        id,
        text: row.get("text")?,
        created_at: row.get("created_at")?,
        author_id: row.get("author_id")?,
        location: Coordinate::new(row.get("lat")?, row.get("lng")?),
        tags,
    })
}

fn load_all_tags(conn: &Connection) -> StorageResult<HashMap<String, Vec<String>>> {
    let mut stmt = conn.prepare(
        "SELECT note_id, tag
         FROM note_tags
         ORDER BY note_id ASC, position ASC;",
    )?;
    let mut rows = stmt.query([])?;
    let mut tags: HashMap<String, Vec<String>> = HashMap::new();
    while let Some(row) = rows.next()? {
        let note_id: String = row.get(0)?;
        let tag: String = row.get(1)?;
        tags.entry(note_id).or_default().push(tag);
    }
    Ok(tags)
}

fn table_exists(conn: &Connection, table: &str) -> StorageResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
