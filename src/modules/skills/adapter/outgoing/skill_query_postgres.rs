use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::skills::adapter::outgoing::sea_orm_entity::skills::{self, Column, Entity};
use crate::skills::application::ports::outgoing::{SkillItem, SkillQuery, SkillQueryError};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_all(&self) -> Result<Vec<SkillItem>, SkillQueryError> {
        let skills = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(skills.into_iter().map(model_to_item).collect())
    }
}

fn model_to_item(model: skills::Model) -> SkillItem {
    SkillItem {
        id: model.id,
        name: model.name,
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
