use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::professions::application::ports::outgoing::ProfessionQuery;
use crate::skills::application::ports::outgoing::SkillQuery;
use crate::users::application::domain::validation::{
    self, msg, UserPayload, ValidationErrors, ValidationMode,
};
use crate::users::application::helpers::context_builder::build_validation_context;
use crate::users::application::ports::incoming::use_cases::{UpdateUserError, UpdateUserUseCase};
use crate::users::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::users::application::ports::outgoing::user_query::{UserQuery, UserQueryError, UserView};
use crate::users::application::ports::outgoing::user_repository::{
    UpdateUserData, UserRepository, UserRepositoryError,
};

pub struct UpdateUserService {
    user_query: Arc<dyn UserQuery>,
    profession_query: Arc<dyn ProfessionQuery>,
    skill_query: Arc<dyn SkillQuery>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserService {
    pub fn new(
        user_query: Arc<dyn UserQuery>,
        profession_query: Arc<dyn ProfessionQuery>,
        skill_query: Arc<dyn SkillQuery>,
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_query,
            profession_query,
            skill_query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl UpdateUserUseCase for UpdateUserService {
    async fn execute(
        &self,
        user_id: Uuid,
        payload: UserPayload,
    ) -> Result<UserView, UpdateUserError> {
        // 1. The target must exist among non-trashed users.
        self.user_query
            .find_active(user_id)
            .await
            .map_err(|e| match e {
                UserQueryError::NotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })?;

        // 2. Validate; email uniqueness excludes the record itself.
        let ctx = build_validation_context(
            &payload,
            Some(user_id),
            self.user_query.as_ref(),
            self.profession_query.as_ref(),
            self.skill_query.as_ref(),
        )
        .await
        .map_err(UpdateUserError::RepositoryError)?;

        let validated = validation::validate(&payload, &ctx, ValidationMode::Update)
            .map_err(UpdateUserError::Validation)?;

        // 3. A blank password keeps the stored hash.
        let password_hash = match validated.password.as_deref() {
            Some(password) => Some(
                self.password_hasher
                    .hash_password(password)
                    .map_err(UpdateUserError::HashingFailed)?,
            ),
            None => None,
        };

        self.repository
            .update(
                user_id,
                UpdateUserData {
                    first_name: validated.first_name,
                    last_name: validated.last_name,
                    email: validated.email,
                    password_hash,
                    role: validated.role,
                    state: validated.state,
                    bio: validated.bio,
                    twitter: validated.twitter,
                    profession: validated.profession,
                    skill_ids: validated.skill_ids,
                },
            )
            .await
            .map_err(map_repository_error)?;

        self.user_query
            .find_active(user_id)
            .await
            .map_err(|e| UpdateUserError::RepositoryError(e.to_string()))
    }
}

fn map_repository_error(err: UserRepositoryError) -> UpdateUserError {
    match err {
        UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
        UserRepositoryError::EmailTaken => {
            UpdateUserError::Validation(ValidationErrors::single("email", msg::EMAIL_TAKEN))
        }
        UserRepositoryError::ProfessionTitleTaken => UpdateUserError::Validation(
            ValidationErrors::single("profession", msg::PROFESSION_TITLE_TAKEN),
        ),
        UserRepositoryError::ProfessionNotFound => UpdateUserError::Validation(
            ValidationErrors::single("profession_id", msg::PROFESSION_ID_INVALID),
        ),
        other => UpdateUserError::RepositoryError(other.to_string()),
    }
}
