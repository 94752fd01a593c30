use serde::{Deserialize, Deserializer, Serialize};

/// A tracked project, in the shape the remote store reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default)]
    pub pomodoros_completed: u32,
    #[serde(default)]
    pub completed: bool,
}

impl Project {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            pomodoros_completed: 0,
            completed: false,
        }
    }
}

/// Sheet cells holding digits come back as JSON numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Cell::deserialize(deserializer)? {
        Cell::Text(s) => s,
        Cell::Int(n) => n.to_string(),
        Cell::Float(f) => f.to_string(),
    })
}
