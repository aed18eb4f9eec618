//! Rendering of command results, as tables for people or as JSON for scripts.

pub mod json;
mod rows;
pub mod table;

use serde::Serialize;

/// A resource that can be shown as one table row.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

impl Output {
    pub fn new(json: bool) -> Self {
        if json { Output::Json } else { Output::Table }
    }

    pub fn list<T: Tabular + Serialize>(self, items: &[T]) -> Result<String, serde_json::Error> {
        match self {
            Output::Table => Ok(table::list(items)),
            Output::Json => json::to_json(items),
        }
    }

    pub fn item<T: Tabular + Serialize>(self, item: &T) -> Result<String, serde_json::Error> {
        match self {
            Output::Table => Ok(table::item(item)),
            Output::Json => json::to_json(item),
        }
    }

    /// Plain confirmation, wrapped in an object for JSON consumers.
    pub fn message(self, message: &str) -> Result<String, serde_json::Error> {
        match self {
            Output::Table => Ok(message.to_string()),
            Output::Json => json::to_json(&serde_json::json!({ "message": message })),
        }
    }
}
