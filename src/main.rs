pub mod modules;
pub use modules::professions;
pub use modules::skills;
pub use modules::users;
pub mod health;
pub mod shared;

use crate::professions::adapter::outgoing::ProfessionQueryPostgres;
use crate::professions::application::ports::outgoing::ProfessionQuery;
use crate::skills::adapter::outgoing::SkillQueryPostgres;
use crate::skills::application::ports::outgoing::SkillQuery;
use crate::users::adapter::outgoing::security::BcryptHasher;
use crate::users::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::users::application::ports::incoming::use_cases::{
    CreateUserUseCase, FetchUserUseCase, ForceDeleteUserUseCase, ListUsersUseCase,
    RestoreUserUseCase, TrashUserUseCase, UpdateUserUseCase, UserFormDataUseCase,
};
use crate::users::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::users::application::ports::outgoing::user_query::UserQuery;
use crate::users::application::ports::outgoing::user_repository::UserRepository;
use crate::users::application::services::{
    CreateUserService, FetchUserService, ForceDeleteUserService, ListUsersService,
    RestoreUserService, TrashUserService, UpdateUserService, UserFormDataService,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_users_use_case: Arc<dyn ListUsersUseCase>,
    pub fetch_user_use_case: Arc<dyn FetchUserUseCase>,
    pub user_form_data_use_case: Arc<dyn UserFormDataUseCase>,
    pub create_user_use_case: Arc<dyn CreateUserUseCase>,
    pub update_user_use_case: Arc<dyn UpdateUserUseCase>,
    pub trash_user_use_case: Arc<dyn TrashUserUseCase>,
    pub restore_user_use_case: Arc<dyn RestoreUserUseCase>,
    pub force_delete_user_use_case: Arc<dyn ForceDeleteUserUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let profession_query = ProfessionQueryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));

    let user_query_arc: Arc<dyn UserQuery> = Arc::new(user_query.clone());
    let profession_query_arc: Arc<dyn ProfessionQuery> = Arc::new(profession_query);
    let skill_query_arc: Arc<dyn SkillQuery> = Arc::new(skill_query);
    let user_repo_arc: Arc<dyn UserRepository> = Arc::new(user_repo.clone());
    let password_hasher_arc: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher);

    // Use cases
    let create_user_use_case = CreateUserService::new(
        Arc::clone(&user_query_arc),
        Arc::clone(&profession_query_arc),
        Arc::clone(&skill_query_arc),
        Arc::clone(&user_repo_arc),
        Arc::clone(&password_hasher_arc),
    );
    let update_user_use_case = UpdateUserService::new(
        Arc::clone(&user_query_arc),
        Arc::clone(&profession_query_arc),
        Arc::clone(&skill_query_arc),
        Arc::clone(&user_repo_arc),
        Arc::clone(&password_hasher_arc),
    );
    let list_users_use_case = ListUsersService::new(user_query.clone());
    let fetch_user_use_case = FetchUserService::new(user_query);
    let user_form_data_use_case =
        UserFormDataService::new(profession_query_arc, skill_query_arc);
    let trash_user_use_case = TrashUserService::new(user_repo.clone());
    let restore_user_use_case = RestoreUserService::new(user_repo.clone());
    let force_delete_user_use_case = ForceDeleteUserService::new(user_repo);

    let state = AppState {
        list_users_use_case: Arc::new(list_users_use_case),
        fetch_user_use_case: Arc::new(fetch_user_use_case),
        user_form_data_use_case: Arc::new(user_form_data_use_case),
        create_user_use_case: Arc::new(create_user_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        trash_user_use_case: Arc::new(trash_user_use_case),
        restore_user_use_case: Arc::new(restore_user_use_case),
        force_delete_user_use_case: Arc::new(force_delete_user_use_case),
    };

    info!("Server run on: {}", server_url);

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users — static paths before the {user_id} matchers
    cfg.service(crate::users::adapter::incoming::web::routes::list_trashed_users_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::user_form_data_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::edit_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::show_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::trash_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::restore_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::force_delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
