pub mod sea_orm_entity;
pub mod skill_associator;
mod skill_query_postgres;

pub use skill_query_postgres::SkillQueryPostgres;
