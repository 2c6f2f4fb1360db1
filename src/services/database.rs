use crate::config::MongoConfig;
use crate::error::AppError;
use crate::models::Planet;
use mongodb::{
    bson::doc,
    options::{ClientOptions, Credential},
    Client as MongoClient, Collection, Database,
};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds the shared client handle. The driver connects lazily, so this
    /// succeeds even when the deployment is unreachable; only a malformed
    /// connection string fails here.
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        tracing::info!(uri = %config.uri, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string {}: {}", config.uri, e);
            AppError::from(e)
        })?;

        if let Some(username) = &config.username {
            options.credential = Some(
                Credential::builder()
                    .username(username.clone())
                    .password(config.password.clone())
                    .build(),
            );
        }

        let client = MongoClient::with_options(options).map_err(AppError::from)?;
        let db = client.database(&config.database);
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn planets(&self) -> Collection<Planet> {
        self.db.collection("planets")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
