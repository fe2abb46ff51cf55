use serde::{Deserialize, Serialize};

/// A programming language with a popularity rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammingLanguage {
    pub id: i32,
    pub name: String,
    pub rating: i32,
}

/// Parameters required to insert a new programming language.
#[derive(Debug, Clone)]
pub struct NewProgrammingLanguage {
    pub name: String,
    pub rating: i32,
}

impl NewProgrammingLanguage {
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}
