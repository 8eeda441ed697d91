mod profession_query;

pub use profession_query::{ProfessionItem, ProfessionQuery, ProfessionQueryError};
