use async_trait::async_trait;
use serde::Serialize;

use crate::professions::application::ports::outgoing::ProfessionItem;
use crate::skills::application::ports::outgoing::SkillItem;

/// Choice lists the create/edit forms render: selectable non-trashed
/// professions and the full skill catalog.
#[derive(Debug, Clone, Serialize)]
pub struct UserFormData {
    pub professions: Vec<ProfessionItem>,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserFormDataError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UserFormDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<UserFormData, UserFormDataError>;
}
