use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::professions::adapter::outgoing::sea_orm_entity::{self as professions, Column, Entity};
use crate::professions::application::ports::outgoing::{
    ProfessionItem, ProfessionQuery, ProfessionQueryError,
};

#[derive(Clone)]
pub struct ProfessionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfessionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfessionQuery for ProfessionQueryPostgres {
    async fn find_selectable(
        &self,
        profession_id: Uuid,
    ) -> Result<Option<ProfessionItem>, ProfessionQueryError> {
        let profession = Entity::find_by_id(profession_id)
            .filter(Column::DeletedAt.is_null())
            .filter(Column::Selectable.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(profession.map(model_to_item))
    }

    async fn title_taken(&self, title: &str) -> Result<bool, ProfessionQueryError> {
        let count = Entity::find()
            .filter(Column::Title.eq(title))
            .filter(Column::DeletedAt.is_null())
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn list_selectable(&self) -> Result<Vec<ProfessionItem>, ProfessionQueryError> {
        let professions = Entity::find()
            .filter(Column::DeletedAt.is_null())
            .filter(Column::Selectable.eq(true))
            .order_by_asc(Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(professions.into_iter().map(model_to_item).collect())
    }
}

fn model_to_item(model: professions::Model) -> ProfessionItem {
    ProfessionItem {
        id: model.id,
        title: model.title,
    }
}

fn map_db_err(e: DbErr) -> ProfessionQueryError {
    ProfessionQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn profession_model(title: &str, selectable: bool) -> professions::Model {
        let now = Utc::now().fixed_offset();
        professions::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            selectable,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn find_selectable_returns_the_matching_profession() {
        let model = profession_model("Estudiante", true);
        let profession_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .into_connection();

        let query = ProfessionQueryPostgres::new(Arc::new(db));

        let found = query.find_selectable(profession_id).await.unwrap();

        assert_eq!(
            found,
            Some(ProfessionItem {
                id: profession_id,
                title: "Estudiante".to_string()
            })
        );
    }

    #[tokio::test]
    async fn find_selectable_returns_none_when_filtered_out() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<professions::Model>::new()])
            .into_connection();

        let query = ProfessionQueryPostgres::new(Arc::new(db));

        let found = query.find_selectable(Uuid::new_v4()).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn list_selectable_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                profession_model("Desarrollador", true),
                profession_model("Estudiante", true),
            ]])
            .into_connection();

        let query = ProfessionQueryPostgres::new(Arc::new(db));

        let professions = query.list_selectable().await.unwrap();

        assert_eq!(professions.len(), 2);
        assert_eq!(professions[0].title, "Desarrollador");
    }
}
