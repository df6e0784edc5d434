use crate::config::{AppConfig, StoreBackend};
use crate::users::{memory::InMemoryUserStore, repo::PgUserStore, store::UserStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn UserStore>,
    /// Present only for the Postgres backend; used to run migrations.
    pub db: Option<PgPool>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let state = match config.backend {
            StoreBackend::Postgres => {
                let store = PgUserStore::connect(&config.database).await?;
                let db = store.pool().clone();
                Self {
                    config,
                    store: Arc::new(store) as Arc<dyn UserStore>,
                    db: Some(db),
                }
            }
            StoreBackend::Memory => {
                tracing::warn!("using in-memory user store; data is lost on exit");
                Self::from_parts(config, Arc::new(InMemoryUserStore::new()))
            }
        };
        Ok(state)
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn UserStore>) -> Self {
        Self {
            config,
            store,
            db: None,
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        use crate::config::DatabaseConfig;

        let config = Arc::new(AppConfig {
            backend: StoreBackend::Memory,
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 1,
                acquire_timeout_secs: 1,
            },
            request_timeout_secs: 5,
            host: "127.0.0.1".into(),
            port: 0,
        });
        Self::from_parts(config, Arc::new(InMemoryUserStore::new()))
    }
}
