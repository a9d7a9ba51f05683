// src/config.rs

use mongodb::{Client, Database, options::ClientOptions};
use std::{env, time::Duration};

use crate::common::error::AppError;

/// Nome do banco lógico onde vivem as três coleções.
pub const DATABASE_NAME: &str = "reservas_hotel";

// O estado compartilhado que será acessível em todo o pipeline
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub async fn new() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        // Única coordenada vinda do ambiente; o nome do banco é fixo.
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let mut opcoes = ClientOptions::parse(&mongodb_uri)
            .await
            .map_err(AppError::BackendUnavailable)?;
        opcoes.app_name = Some("hotel-reservas".to_string());
        opcoes.server_selection_timeout = Some(Duration::from_secs(3));

        let cliente = Client::with_options(opcoes).map_err(AppError::BackendUnavailable)?;
        let db = cliente.database(DATABASE_NAME);

        // Confirma que o servidor responde antes do primeiro estágio.
        db.run_command(bson::doc! { "ping": 1 })
            .await
            .map_err(AppError::BackendUnavailable)?;

        tracing::info!("✅ Conexão com o MongoDB estabelecida com sucesso!");

        Ok(Self { db })
    }
}
