mod skill_query;

pub use skill_query::{SkillItem, SkillQuery, SkillQueryError};
