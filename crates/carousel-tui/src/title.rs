use carousel_core::Identified;
use uuid::Uuid;

/// A card shown in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub id: Uuid,
    pub name: String,
}

impl Title {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Numbered placeholder titles
    pub fn numbered(count: usize) -> Vec<Self> {
        (1..=count).map(|n| Self::new(format!("Title {}", n))).collect()
    }
}

impl Identified for Title {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}
