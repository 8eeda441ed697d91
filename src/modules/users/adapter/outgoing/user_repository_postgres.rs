use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::professions::adapter::outgoing::profession_resolver::{
    resolve_profession, ProfessionResolveError,
};
use crate::skills::adapter::outgoing::skill_associator::{sync_user_skills, SkillSyncError};
use crate::skills::adapter::outgoing::sea_orm_entity::skill_user;
use crate::users::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::user_profiles::{
    self, ActiveModel as ProfileActiveModel, Entity as ProfileEntity,
};
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, data: CreateUserData) -> Result<Uuid, UserRepositoryError> {
        // A dropped transaction rolls back, so an early `?` leaves no
        // user, no profile, no links and no freshly created profession.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let profession_id = resolve_profession(&txn, &data.profession)
            .await
            .map_err(map_resolve_err)?;

        let user_id = Uuid::new_v4();
        let now = Utc::now();

        UserActiveModel {
            id: Set(user_id),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            active: Set(data.state.is_active()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            deleted_at: Set(None),
        }
        .insert(&txn)
        .await
        .map_err(map_unique_email)?;

        ProfileActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            bio: Set(data.bio),
            twitter: Set(data.twitter),
            profession_id: Set(Some(profession_id)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            deleted_at: Set(None),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        sync_user_skills(&txn, user_id, &data.skill_ids)
            .await
            .map_err(map_sync_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(user_id)
    }

    async fn update(&self, user_id: Uuid, data: UpdateUserData) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let user = UserEntity::find_by_id(user_id)
            .filter(UserColumn::DeletedAt.is_null())
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let profession_id = resolve_profession(&txn, &data.profession)
            .await
            .map_err(map_resolve_err)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.first_name = Set(data.first_name);
        active_user.last_name = Set(data.last_name);
        active_user.email = Set(data.email);
        active_user.role = Set(data.role.as_str().to_string());
        active_user.active = Set(data.state.is_active());
        if let Some(password_hash) = data.password_hash {
            active_user.password_hash = Set(password_hash);
        }

        active_user
            .update(&txn)
            .await
            .map_err(map_unique_email)?;

        let profile = ProfileEntity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let now = Utc::now();
        match profile {
            Some(profile) => {
                let mut active_profile: ProfileActiveModel = profile.into();
                active_profile.bio = Set(data.bio);
                active_profile.twitter = Set(data.twitter);
                active_profile.profession_id = Set(Some(profession_id));
                active_profile.update(&txn).await.map_err(map_db_err)?;
            }
            None => {
                ProfileActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    bio: Set(data.bio),
                    twitter: Set(data.twitter),
                    profession_id: Set(Some(profession_id)),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                    deleted_at: Set(None),
                }
                .insert(&txn)
                .await
                .map_err(map_db_err)?;
            }
        }

        sync_user_skills(&txn, user_id, &data.skill_ids)
            .await
            .map_err(map_sync_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }

    async fn trash(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Lookup runs against active records only; trashing twice is
        // unreachable through it.
        let user = UserEntity::find_by_id(user_id)
            .filter(UserColumn::DeletedAt.is_null())
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        // One timestamp across the ordered transitions: user, profile,
        // skill links.
        let now: DateTimeWithTimeZone = Utc::now().into();

        let mut active_user: UserActiveModel = user.into();
        active_user.deleted_at = Set(Some(now));
        active_user.update(&txn).await.map_err(map_db_err)?;

        set_cascade_marker(&txn, user_id, Some(now)).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }

    async fn restore(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // The target must come out of the trashed set; a never-deleted
        // user is a not-found here.
        let user = UserEntity::find_by_id(user_id)
            .filter(UserColumn::DeletedAt.is_not_null())
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.deleted_at = Set(None);
        active_user.update(&txn).await.map_err(map_db_err)?;

        set_cascade_marker(&txn, user_id, None).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }

    async fn force_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        UserEntity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        skill_user::Entity::delete_many()
            .filter(skill_user::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        ProfileEntity::delete_many()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        UserEntity::delete_many()
            .filter(UserColumn::Id.eq(user_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

/// Stamps or clears `deleted_at` on the profile and every skill link of
/// the user, on the caller's transaction.
async fn set_cascade_marker<C>(
    conn: &C,
    user_id: Uuid,
    marker: Option<DateTimeWithTimeZone>,
) -> Result<(), UserRepositoryError>
where
    C: ConnectionTrait,
{
    ProfileEntity::update_many()
        .col_expr(user_profiles::Column::DeletedAt, Expr::value(marker))
        .filter(user_profiles::Column::UserId.eq(user_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    skill_user::Entity::update_many()
        .col_expr(skill_user::Column::DeletedAt, Expr::value(marker))
        .filter(skill_user::Column::UserId.eq(user_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    Ok(())
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn map_unique_email(e: DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return UserRepositoryError::EmailTaken;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

fn map_resolve_err(e: ProfessionResolveError) -> UserRepositoryError {
    match e {
        ProfessionResolveError::NotFound => UserRepositoryError::ProfessionNotFound,
        ProfessionResolveError::TitleTaken => UserRepositoryError::ProfessionTitleTaken,
        ProfessionResolveError::DatabaseError(msg) => UserRepositoryError::DatabaseError(msg),
    }
}

fn map_sync_err(e: SkillSyncError) -> UserRepositoryError {
    match e {
        SkillSyncError::DatabaseError(msg) => UserRepositoryError::DatabaseError(msg),
    }
}
