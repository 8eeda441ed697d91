use std::sync::Arc;

use async_trait::async_trait;

use crate::professions::application::ports::outgoing::ProfessionQuery;
use crate::skills::application::ports::outgoing::SkillQuery;
use crate::users::application::ports::incoming::use_cases::{
    UserFormData, UserFormDataError, UserFormDataUseCase,
};

pub struct UserFormDataService {
    profession_query: Arc<dyn ProfessionQuery>,
    skill_query: Arc<dyn SkillQuery>,
}

impl UserFormDataService {
    pub fn new(
        profession_query: Arc<dyn ProfessionQuery>,
        skill_query: Arc<dyn SkillQuery>,
    ) -> Self {
        Self {
            profession_query,
            skill_query,
        }
    }
}

#[async_trait]
impl UserFormDataUseCase for UserFormDataService {
    async fn execute(&self) -> Result<UserFormData, UserFormDataError> {
        let professions = self
            .profession_query
            .list_selectable()
            .await
            .map_err(|e| UserFormDataError::RepositoryError(e.to_string()))?;

        let skills = self
            .skill_query
            .list_all()
            .await
            .map_err(|e| UserFormDataError::RepositoryError(e.to_string()))?;

        Ok(UserFormData {
            professions,
            skills,
        })
    }
}
