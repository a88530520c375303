use crate::utils::error::DrawError;
use std::fmt;
use std::str::FromStr;

/// A prize in the pool. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub weight: u32,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, weight: u32) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
        }
    }
}

impl FromStr for Item {
    type Err = DrawError;

    /// Parses `"<id> <name> <weight>"`.
    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| DrawError::MalformedRecordError {
            record: record.to_string(),
            reason,
        };

        let tokens: Vec<&str> = record.split_whitespace().collect();
        let [id, name, weight] = tokens.as_slice() else {
            return Err(malformed(format!(
                "expected 3 tokens (id name weight), found {}",
                tokens.len()
            )));
        };

        let id = id
            .parse::<i64>()
            .map_err(|e| malformed(format!("invalid id '{}': {}", id, e)))?;
        let weight = weight
            .parse::<i64>()
            .map_err(|e| malformed(format!("invalid weight '{}': {}", weight, e)))?;

        if weight <= 0 {
            return Err(malformed(format!("weight must be positive, got {}", weight)));
        }
        let weight = u32::try_from(weight)
            .map_err(|_| malformed(format!("weight {} is too large", weight)))?;

        Ok(Item::new(id, *name, weight))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Weight: {}", self.id, self.name, self.weight)
    }
}

/// One line of a batch draw. `sequence_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub sequence_number: usize,
    pub item_name: String,
}

impl DrawResult {
    pub fn new(sequence_number: usize, item_name: impl Into<String>) -> Self {
        Self {
            sequence_number,
            item_name: item_name.into(),
        }
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Draw {}: {}", self.sequence_number, self.item_name)
    }
}
