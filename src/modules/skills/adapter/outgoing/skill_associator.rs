use std::collections::HashSet;

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::skills::adapter::outgoing::sea_orm_entity::skill_user::{
    ActiveModel as SkillUserActiveModel, Column, Entity as SkillUserEntity,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillSyncError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Reconciles a user's skill associations to exactly `skill_ids`, on
/// the caller's connection. Rows outside the new set are removed
/// physically, missing ones inserted; re-running with the same set
/// changes nothing. An empty set detaches everything.
pub async fn sync_user_skills<C>(
    conn: &C,
    user_id: Uuid,
    skill_ids: &[Uuid],
) -> Result<(), SkillSyncError>
where
    C: ConnectionTrait,
{
    let existing = SkillUserEntity::find()
        .filter(Column::UserId.eq(user_id))
        .all(conn)
        .await
        .map_err(map_db_err)?;

    let wanted: HashSet<Uuid> = skill_ids.iter().copied().collect();
    let current: HashSet<Uuid> = existing.iter().map(|link| link.skill_id).collect();

    if wanted.is_empty() {
        SkillUserEntity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(conn)
            .await
            .map_err(map_db_err)?;
        return Ok(());
    }

    SkillUserEntity::delete_many()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::SkillId.is_not_in(wanted.iter().copied()))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    for skill_id in skill_ids {
        if current.contains(skill_id) {
            continue;
        }
        SkillUserActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            skill_id: Set(*skill_id),
            deleted_at: Set(None),
        }
        .insert(conn)
        .await
        .map_err(map_db_err)?;
    }

    Ok(())
}

fn map_db_err(e: sea_orm::DbErr) -> SkillSyncError {
    SkillSyncError::DatabaseError(e.to_string())
}
