use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionItem {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfessionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfessionQuery: Send + Sync {
    /// The profession, if it exists, is not trashed and is selectable.
    async fn find_selectable(
        &self,
        profession_id: Uuid,
    ) -> Result<Option<ProfessionItem>, ProfessionQueryError>;

    /// A non-trashed profession already carries this exact title.
    async fn title_taken(&self, title: &str) -> Result<bool, ProfessionQueryError>;

    /// Dropdown source: selectable, non-trashed, title-ordered.
    async fn list_selectable(&self) -> Result<Vec<ProfessionItem>, ProfessionQueryError>;
}
