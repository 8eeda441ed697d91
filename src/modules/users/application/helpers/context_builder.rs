use std::collections::HashSet;
use std::str::FromStr;

use uuid::Uuid;

use crate::professions::application::ports::outgoing::ProfessionQuery;
use crate::skills::application::ports::outgoing::SkillQuery;
use crate::users::application::domain::validation::{UserPayload, ValidationContext};
use crate::users::application::ports::outgoing::user_query::UserQuery;

/// Gathers the storage-side facts the validator consumes, querying only
/// for what the payload actually submitted. `exclude_user` is the
/// record under update, left out of the email uniqueness check.
pub async fn build_validation_context(
    payload: &UserPayload,
    exclude_user: Option<Uuid>,
    user_query: &dyn UserQuery,
    profession_query: &dyn ProfessionQuery,
    skill_query: &dyn SkillQuery,
) -> Result<ValidationContext, String> {
    let email = payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    let email_taken = match email {
        Some(email) => user_query
            .email_taken(email, exclude_user)
            .await
            .map_err(|e| e.to_string())?,
        None => false,
    };

    let submitted_profession_id = payload
        .profession_id
        .as_deref()
        .map(str::trim)
        .and_then(|raw| Uuid::from_str(raw).ok());

    let profession_valid = match submitted_profession_id {
        Some(id) => profession_query
            .find_selectable(id)
            .await
            .map_err(|e| e.to_string())?
            .is_some(),
        None => false,
    };

    let title = payload
        .profession
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let profession_title_taken = match title {
        Some(title) => profession_query
            .title_taken(title)
            .await
            .map_err(|e| e.to_string())?,
        None => false,
    };

    let known_skill_ids: HashSet<Uuid> = if payload.skills.is_some() {
        skill_query
            .list_all()
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(|skill| skill.id)
            .collect()
    } else {
        HashSet::new()
    };

    Ok(ValidationContext {
        email_taken,
        profession_valid,
        profession_title_taken,
        known_skill_ids,
    })
}
