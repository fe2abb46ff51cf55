use diesel::prelude::*;

use crate::domain::programming_language::{
    NewProgrammingLanguage as DomainNewProgrammingLanguage,
    ProgrammingLanguage as DomainProgrammingLanguage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::programming_languages)]
pub struct ProgrammingLanguage {
    pub id: i32,
    pub name: String,
    pub rating: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::programming_languages)]
pub struct NewProgrammingLanguage<'a> {
    pub name: &'a str,
    pub rating: i32,
}

impl From<ProgrammingLanguage> for DomainProgrammingLanguage {
    fn from(value: ProgrammingLanguage) -> Self {
        Self {
            id: value.id,
            name: value.name,
            rating: value.rating,
        }
    }
}

impl<'a> From<&'a DomainNewProgrammingLanguage> for NewProgrammingLanguage<'a> {
    fn from(value: &'a DomainNewProgrammingLanguage) -> Self {
        Self {
            name: value.name.as_str(),
            rating: value.rating,
        }
    }
}
