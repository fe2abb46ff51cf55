use dotenvy::dotenv;
use rand::Rng;

use product_store::config::PersistenceConfig;
use product_store::db::bootstrap;
use product_store::domain::programming_language::NewProgrammingLanguage;
use product_store::repository::{
    DieselRepository, ProgrammingLanguageReader, ProgrammingLanguageWriter,
};

const LANGUAGES: &str = "Java,JavaScript,C++,C#,Python,Go,Rust,PHP";
const MIN_RATING: i32 = 5;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let config = match PersistenceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let repo = match bootstrap(&config) {
        Ok(pool) => DieselRepository::new(pool),
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();
    let new_languages: Vec<NewProgrammingLanguage> = LANGUAGES
        .split(',')
        .map(|name| NewProgrammingLanguage::new(name, rng.gen_range(0..10)))
        .collect();

    match repo.create_programming_languages(&new_languages) {
        Ok(count) => log::info!("Created {count} programming languages"),
        Err(e) => {
            log::error!("Failed to create programming languages: {e}");
            std::process::exit(1);
        }
    }

    match repo.list_programming_languages_rated_above(MIN_RATING) {
        Ok(languages) => {
            for language in languages {
                println!("{} : {}", language.name, language.rating);
            }
        }
        Err(e) => {
            log::error!("Failed to list programming languages: {e}");
            std::process::exit(1);
        }
    }
}
