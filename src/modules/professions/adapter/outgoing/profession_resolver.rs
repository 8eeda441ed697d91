use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::professions::adapter::outgoing::sea_orm_entity::{
    ActiveModel as ProfessionActiveModel, Column, Entity as ProfessionEntity,
};
use crate::users::application::domain::entities::ProfessionRef;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfessionResolveError {
    #[error("Profession not found")]
    NotFound,

    #[error("Profession title already exists")]
    TitleTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Resolves the profession a profile will reference, on the caller's
/// connection so a created row dies with a rolled-back transaction.
///
/// Two explicit branches, not a find-or-create: an `Existing` id must
/// already be there, and a `New` title colliding with a live row fails
/// on the partial unique index instead of reusing it.
pub async fn resolve_profession<C>(
    conn: &C,
    profession: &ProfessionRef,
) -> Result<Uuid, ProfessionResolveError>
where
    C: ConnectionTrait,
{
    match profession {
        ProfessionRef::Existing(id) => {
            let found = ProfessionEntity::find_by_id(*id)
                .filter(Column::DeletedAt.is_null())
                .one(conn)
                .await
                .map_err(|e| ProfessionResolveError::DatabaseError(e.to_string()))?;

            found
                .map(|profession| profession.id)
                .ok_or(ProfessionResolveError::NotFound)
        }
        ProfessionRef::New(title) => {
            let id = Uuid::new_v4();
            let now = Utc::now();

            ProfessionActiveModel {
                id: Set(id),
                title: Set(title.clone()),
                selectable: Set(true),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                deleted_at: Set(None),
            }
            .insert(conn)
            .await
            .map_err(|e| {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("23505")
                    || err_str.contains("duplicate key")
                    || err_str.contains("unique constraint")
                {
                    return ProfessionResolveError::TitleTaken;
                }
                ProfessionResolveError::DatabaseError(e.to_string())
            })?;

            Ok(id)
        }
    }
}
