use dotenvy::dotenv;

use product_store::config::PersistenceConfig;
use product_store::db::bootstrap;
use product_store::domain::product::{Product, ProductUpdate};
use product_store::repository::DieselRepository;
use product_store::repository::errors::RepositoryResult;
use product_store::services::products::ProductService;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match PersistenceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match bootstrap(&config) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    if let Err(e) = run(&repo) {
        log::error!("Product demo failed: {e}");
        std::process::exit(1);
    }
}

fn run(repo: &DieselRepository) -> RepositoryResult<()> {
    let service = ProductService::new(repo.clone());

    let mut biscuit = Product::new("Biscuit", 8.37);
    service.save(&mut biscuit)?;

    let mut shoes = Product::new("Shoes", 49.99);
    service.save(&mut shoes)?;

    let mut kettle = Product::new("Kettle", 35.0);
    service.save(&mut kettle)?;

    for product in service.get_all()? {
        print_product(&product);
    }

    // Every call above used its own connection, so these instances are detached.
    let cake = service.update_with_get_persistent(&biscuit, &ProductUpdate::new("cake", 10.50))?;
    log::info!("Updated via lookup: {cake}");

    let boots = service.update_with_merge_detached(&shoes, &ProductUpdate::new("boots", 85.99))?;
    log::info!("Updated via merge: {boots}");

    service.delete(&kettle)?;
    log::info!("Deleted {kettle}");

    // Within one session the saved instance stays managed and can be removed directly.
    let mut session = repo.open_session()?;
    let mut milk = Product::new("Milk", 2.37);
    session.save(&mut milk)?;
    session.delete(&milk)?;
    log::info!("Saved and deleted {milk} through a shared session");

    for product in service.get_all()? {
        print_product(&product);
    }

    Ok(())
}

fn print_product(product: &Product) {
    match serde_json::to_string(product) {
        Ok(line) => println!("{line}"),
        Err(e) => log::warn!("Failed to serialize {product}: {e}"),
    }
}
