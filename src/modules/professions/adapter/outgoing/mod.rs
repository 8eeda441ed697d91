pub mod profession_resolver;
pub mod sea_orm_entity;
mod profession_query_postgres;

pub use profession_query_postgres::ProfessionQueryPostgres;
