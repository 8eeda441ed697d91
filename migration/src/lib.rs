pub use sea_orm_migration::prelude::*;

mod m20260210_093015_create_users_table;
mod m20260210_093128_create_professions_table;
mod m20260210_093244_create_user_profiles_table;
mod m20260210_093401_create_skills_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_093015_create_users_table::Migration),
            Box::new(m20260210_093128_create_professions_table::Migration),
            Box::new(m20260210_093244_create_user_profiles_table::Migration),
            Box::new(m20260210_093401_create_skills_tables::Migration),
        ]
    }
}
