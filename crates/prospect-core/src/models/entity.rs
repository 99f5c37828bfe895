use serde::{Deserialize, Serialize};

/// What the retrieval collaborator knows about the organization being probed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityContext {
    pub entity_id: String,
    pub name: String,
    pub domain: Option<String>,
    pub country: Option<String>,
    pub industry: Option<String>,
}

impl EntityContext {
    pub fn new(entity_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Template for generating one hypothesis per entity.
///
/// `{entity}` in `statement` is replaced with the entity name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub category: String,
    pub statement: String,
}

impl CategoryTemplate {
    pub fn new(category: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            statement: statement.into(),
        }
    }

    pub fn render(&self, entity: &EntityContext) -> String {
        self.statement.replace("{entity}", &entity.name)
    }
}
