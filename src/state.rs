use std::sync::Arc;

use sqlx::MySqlPool;

use super::{config::Config, database::init_pool};

pub struct State {
    pub config: Config,
    pub pool: MySqlPool,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let pool = init_pool(&config.database_url, config.max_connections).await;

        Arc::new(Self { config, pool })
    }
}
