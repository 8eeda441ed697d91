use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::professions::adapter::outgoing::sea_orm_entity as professions;
use crate::skills::adapter::outgoing::sea_orm_entity::{skill_user, skills};
use crate::skills::application::ports::outgoing::SkillItem;
use crate::users::application::domain::entities::{Role, UserState};
use crate::users::application::ports::outgoing::user_query::{
    PageRequest, PageResult, SortDirection, UserListFilter, UserListItem, UserListView, UserQuery,
    UserQueryError, UserSortField, UserView,
};

use super::sea_orm_entity::user_profiles;
use super::sea_orm_entity::users::{self, Column as UserColumn, Entity as UserEntity};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn email_taken(
        &self,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, UserQueryError> {
        let mut query = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::DeletedAt.is_null());

        if let Some(user_id) = exclude {
            query = query.filter(UserColumn::Id.ne(user_id));
        }

        let count = query.count(&*self.db).await.map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn find_active(&self, user_id: Uuid) -> Result<UserView, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserQueryError::NotFound)?;

        let profile = user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let profession_id = profile.as_ref().and_then(|p| p.profession_id);
        let profession_title = match profession_id {
            Some(profession_id) => professions::Entity::find_by_id(profession_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(|profession| profession.title),
            None => None,
        };

        let links = skill_user::Entity::find()
            .filter(skill_user::Column::UserId.eq(user_id))
            .filter(skill_user::Column::DeletedAt.is_null())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let skills = if links.is_empty() {
            Vec::new()
        } else {
            let skill_ids: Vec<Uuid> = links.iter().map(|link| link.skill_id).collect();
            skills::Entity::find()
                .filter(skills::Column::Id.is_in(skill_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|skill| SkillItem {
                    id: skill.id,
                    name: skill.name,
                })
                .collect()
        };

        Ok(model_to_view(user, profile, profession_title, skills))
    }

    async fn list(
        &self,
        view: UserListView,
        filter: UserListFilter,
        sort: UserSortField,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<PageResult<UserListItem>, UserQueryError> {
        let mut query = UserEntity::find();

        query = match view {
            UserListView::Active => query.filter(UserColumn::DeletedAt.is_null()),
            UserListView::Trashed => query.filter(UserColumn::DeletedAt.is_not_null()),
        };

        if let Some(ref term) = filter.search {
            let pattern = format!("%{}%", term.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(UserColumn::FirstName).ilike(&pattern))
                    .add(Expr::col(UserColumn::LastName).ilike(&pattern))
                    .add(Expr::col(UserColumn::Email).ilike(&pattern)),
            );
        }

        let order = match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        let sort_column = match sort {
            UserSortField::FirstName => UserColumn::FirstName,
            UserSortField::Email => UserColumn::Email,
            UserSortField::CreatedAt => UserColumn::CreatedAt,
        };
        // Id as tiebreaker keeps page boundaries stable for equal keys
        query = query
            .order_by(sort_column, order)
            .order_by_asc(UserColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let offset = (page.page.saturating_sub(1) as u64) * page.per_page as u64;
        let users = query
            .offset(offset)
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let profession_titles = self.profession_titles_for(&users).await?;

        let items = users
            .into_iter()
            .map(|user| {
                let profession_title = profession_titles.get(&user.id).cloned();
                model_to_list_item(user, profession_title)
            })
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

impl UserQueryPostgres {
    /// Resolves profile → profession titles for one page of users with
    /// two set-based queries instead of one pair per row.
    async fn profession_titles_for(
        &self,
        users: &[users::Model],
    ) -> Result<HashMap<Uuid, String>, UserQueryError> {
        if users.is_empty() {
            return Ok(HashMap::new());
        }

        let user_ids: Vec<Uuid> = users.iter().map(|user| user.id).collect();
        let profiles = user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let profession_ids: Vec<Uuid> = profiles
            .iter()
            .filter_map(|profile| profile.profession_id)
            .collect();

        if profession_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let titles: HashMap<Uuid, String> = professions::Entity::find()
            .filter(professions::Column::Id.is_in(profession_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|profession| (profession.id, profession.title))
            .collect();

        Ok(profiles
            .into_iter()
            .filter_map(|profile| {
                let title = profile
                    .profession_id
                    .and_then(|profession_id| titles.get(&profession_id).cloned())?;
                Some((profile.user_id, title))
            })
            .collect())
    }
}

fn model_to_view(
    user: users::Model,
    profile: Option<user_profiles::Model>,
    profession_title: Option<String>,
    skills: Vec<SkillItem>,
) -> UserView {
    let (bio, twitter, profession_id) = match profile {
        Some(profile) => (profile.bio, profile.twitter, profile.profession_id),
        None => (String::new(), None, None),
    };

    UserView {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        role: Role::parse(&user.role).unwrap_or_default(),
        state: UserState::from_active(user.active),
        bio,
        twitter,
        profession_id,
        profession_title,
        skills,
        created_at: user.created_at.into(),
        updated_at: user.updated_at.into(),
    }
}

fn model_to_list_item(user: users::Model, profession_title: Option<String>) -> UserListItem {
    UserListItem {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        role: Role::parse(&user.role).unwrap_or_default(),
        state: UserState::from_active(user.active),
        profession_title,
        created_at: user.created_at.into(),
        deleted_at: user.deleted_at.map(Into::into),
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}
