use serde::{Deserialize, Serialize};

/// A kitten row, always owned by exactly one user
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Kitten {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub age: i64,
    pub color: String,
}

/// Create request body. Owner fields sent by the client are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewKitten {
    pub name: String,
    pub age: i64,
    pub color: String,
}

/// Public attributes returned by the fetch endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KittenView {
    pub age: i64,
    pub color: String,
    pub name: String,
}

impl From<Kitten> for KittenView {
    fn from(kitten: Kitten) -> Self {
        Self {
            age: kitten.age,
            color: kitten.color,
            name: kitten.name,
        }
    }
}
