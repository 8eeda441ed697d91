use std::sync::Arc;

use async_trait::async_trait;

use crate::professions::application::ports::outgoing::ProfessionQuery;
use crate::skills::application::ports::outgoing::SkillQuery;
use crate::users::application::domain::validation::{
    self, msg, UserPayload, ValidationErrors, ValidationMode,
};
use crate::users::application::helpers::context_builder::build_validation_context;
use crate::users::application::ports::incoming::use_cases::{CreateUserError, CreateUserUseCase};
use crate::users::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::users::application::ports::outgoing::user_query::{UserQuery, UserView};
use crate::users::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

pub struct CreateUserService {
    user_query: Arc<dyn UserQuery>,
    profession_query: Arc<dyn ProfessionQuery>,
    skill_query: Arc<dyn SkillQuery>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserService {
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
impl CreateUserUseCase for CreateUserService {
    async fn execute(&self, payload: UserPayload) -> Result<UserView, CreateUserError> {
        // 1. Gather facts, validate. Failures stop here, before any write.
        let ctx = build_validation_context(
            &payload,
            None,
            self.user_query.as_ref(),
            self.profession_query.as_ref(),
            self.skill_query.as_ref(),
        )
        .await
        .map_err(CreateUserError::RepositoryError)?;

        let validated = validation::validate(&payload, &ctx, ValidationMode::Create)
            .map_err(CreateUserError::Validation)?;

        // 2. Hash the password. Create-mode validation guarantees one.
        let password_hash = match validated.password.as_deref() {
            Some(password) => self
                .password_hasher
                .hash_password(password)
                .map_err(CreateUserError::HashingFailed)?,
            None => return Err(CreateUserError::HashingFailed("password missing".into())),
        };

        // 3. Persist atomically; constraint races come back as field errors.
        let user_id = self
            .repository
            .create(CreateUserData {
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
            })
            .await
            .map_err(map_repository_error)?;

        self.user_query
            .find_active(user_id)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))
    }
}

/// The unique indexes are the source of truth under concurrent
/// requests; when they fire after a passed pre-check, the failure is
/// surfaced as the same field error the validator would have produced.
fn map_repository_error(err: UserRepositoryError) -> CreateUserError {
    match err {
        UserRepositoryError::EmailTaken => {
            CreateUserError::Validation(ValidationErrors::single("email", msg::EMAIL_TAKEN))
        }
        UserRepositoryError::ProfessionTitleTaken => CreateUserError::Validation(
            ValidationErrors::single("profession", msg::PROFESSION_TITLE_TAKEN),
        ),
        UserRepositoryError::ProfessionNotFound => CreateUserError::Validation(
            ValidationErrors::single("profession_id", msg::PROFESSION_ID_INVALID),
        ),
        other => CreateUserError::RepositoryError(other.to_string()),
    }
}
