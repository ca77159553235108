//! A tiny record type shared by the unit tests in this crate.

use crate::StoreRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub text: String,
}

impl Note {
    pub fn new(id: u32, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum NoteQuery {
    CountContaining(String),
}

#[derive(Debug)]
pub enum NoteAction {
    Uppercase,
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("note text is empty")]
    Empty,
}

impl StoreRecord for Note {
    type Id = u32;
    type Create = String;
    type Update = String;
    type Query = NoteQuery;
    type QueryResult = usize;
    type Action = NoteAction;
    type ActionResult = usize;
    type Error = NoteError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(existing: &[Self], text: String) -> Result<Self, NoteError> {
        if text.is_empty() {
            return Err(NoteError::Empty);
        }
        Ok(Self {
            id: existing.len() as u32 + 1,
            text,
        })
    }

    fn on_update(&mut self, text: String) -> Result<(), NoteError> {
        self.text = text;
        Ok(())
    }

    fn handle_query(records: &[Self], query: NoteQuery) -> Result<usize, NoteError> {
        match query {
            NoteQuery::CountContaining(needle) => {
                Ok(records.iter().filter(|n| n.text.contains(&needle)).count())
            }
        }
    }

    fn handle_action(records: &mut [Self], action: NoteAction) -> Result<usize, NoteError> {
        match action {
            NoteAction::Uppercase => {
                for note in records.iter_mut() {
                    note.text = note.text.to_uppercase();
                }
                Ok(records.len())
            }
        }
    }
}
