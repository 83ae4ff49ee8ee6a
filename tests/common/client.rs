use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use entity::startup::Visibility;
use solace::{
    db::postgres_service::PostgresService,
    db::startup::NewStartup,
    db::user::NewUser,
    policy::AdminPolicy,
    routes::configure_routes,
    utils::token::encrypt,
};

/// The one email the test policy treats as an administrator.
pub const ADMIN_EMAIL: &str = "root@solace.test";

pub const TEST_PASSWORD: &str = "hunter22";

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub policy: AdminPolicy,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            policy: AdminPolicy::new([ADMIN_EMAIL]),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.policy.clone()))
            .configure(configure_routes)
    }

    /// Seed a user straight into the store and hand back (id, bearer token).
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> (Uuid, String) {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));
        let username = email.split('@').next().unwrap().to_string();

        let password_hash = encrypt(TEST_PASSWORD).expect("Failed to hash password");

        let user = self
            .db
            .create_user(NewUser {
                email,
                username,
                password_hash,
            })
            .await
            .expect("Failed to create user");

        let token = self
            .db
            .issue_session_token(&user.id)
            .await
            .expect("Failed to issue token");

        (user.id, token)
    }

    /// An admin is just a user whose email the policy allows.
    #[allow(dead_code)]
    pub async fn create_test_admin(&self) -> (Uuid, String) {
        self.create_test_user(Some(ADMIN_EMAIL.to_string())).await
    }

    #[allow(dead_code)]
    pub async fn create_test_startup(
        &self,
        owner: Uuid,
        name: &str,
        visibility: Visibility,
    ) -> entity::startup::Model {
        self.db
            .create_startup(NewStartup {
                user_id: owner,
                name: name.to_string(),
                description: format!("{} does something wonderful.", name),
                image_url: None,
                visibility,
            })
            .await
            .expect("Failed to create startup")
    }
}
