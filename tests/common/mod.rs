use planet_service::config::PlanetConfig;
use planet_service::models::Planet;
use planet_service::services::MongoDb;
use planet_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawns the service against a unique database, letting the caller
    /// adjust configuration before the application is built.
    pub async fn spawn_with(customize: impl FnOnce(&mut PlanetConfig)) -> Self {
        if std::env::var("MONGO_URI").is_err() {
            std::env::set_var("MONGO_URI", "mongodb://localhost:27017");
        }

        let db_name = format!("planet_test_{}", Uuid::new_v4());

        let mut config = PlanetConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests by polling the liveness
        // endpoint.
        let client = reqwest::Client::new();
        let live_url = format!("{}/live", address);
        for _ in 0..50 {
            if client.get(&live_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    pub async fn seed_planet(&self, planet: &Planet) {
        self.db
            .planets()
            .insert_one(planet, None)
            .await
            .expect("Failed to seed planet");
    }

    /// Drops the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

pub fn planet(id: i32, name: &str) -> Planet {
    Planet {
        name: name.to_string(),
        id,
        description: format!("{} is a body in the seeded catalog.", name),
        image: format!("https://example.com/images/{}.png", name.to_lowercase()),
        velocity: "47.4 km/s".to_string(),
        distance: "57.9 million km".to_string(),
    }
}
