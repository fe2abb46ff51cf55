use diesel::prelude::*;

use crate::{
    domain::programming_language::{
        NewProgrammingLanguage as DomainNewProgrammingLanguage,
        ProgrammingLanguage as DomainProgrammingLanguage,
    },
    models::programming_language::{
        NewProgrammingLanguage as DbNewProgrammingLanguage,
        ProgrammingLanguage as DbProgrammingLanguage,
    },
    repository::{
        DieselRepository, ProgrammingLanguageReader, ProgrammingLanguageWriter,
        errors::RepositoryResult,
    },
};

impl ProgrammingLanguageReader for DieselRepository {
    fn list_programming_languages_rated_above(
        &self,
        min_rating: i32,
    ) -> RepositoryResult<Vec<DomainProgrammingLanguage>> {
        use crate::schema::programming_languages;

        self.run_in_transaction(|conn| {
            let languages = programming_languages::table
                .filter(programming_languages::rating.gt(min_rating))
                .order(programming_languages::id.asc())
                .load::<DbProgrammingLanguage>(conn)?;

            Ok(languages.into_iter().map(Into::into).collect())
        })
    }
}

impl ProgrammingLanguageWriter for DieselRepository {
    fn create_programming_languages(
        &self,
        new_languages: &[DomainNewProgrammingLanguage],
    ) -> RepositoryResult<usize> {
        use crate::schema::programming_languages;

        self.run_in_transaction(|conn| {
            let mut count_inserted: usize = 0;

            for new_language in new_languages {
                let db_new = DbNewProgrammingLanguage::from(new_language);
                count_inserted += diesel::insert_into(programming_languages::table)
                    .values(&db_new)
                    .execute(conn)?;
            }

            Ok(count_inserted)
        })
    }
}
