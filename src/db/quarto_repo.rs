// src/db/quarto_repo.rs

use bson::doc;
use mongodb::{Collection, Database};

use crate::common::db_utils::{bulk_failure_index, update_exactly_one};
use crate::common::error::AppError;
use crate::models::{Quarto, StatusQuarto};

#[derive(Clone)]
pub struct QuartoRepository {
    collection: Collection<Quarto>,
}

impl QuartoRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(Quarto::COLLECTION),
        }
    }

    pub async fn clear(&self) -> Result<u64, AppError> {
        let resultado = self.collection.delete_many(doc! {}).await?;
        Ok(resultado.deleted_count)
    }

    pub async fn insert_batch(&self, quartos: &[Quarto]) -> Result<(), AppError> {
        self.collection
            .insert_many(quartos)
            .await
            .map_err(|cause| AppError::SeedFailure {
                collection: Quarto::COLLECTION.to_string(),
                index: bulk_failure_index(&cause),
                cause,
            })?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    pub async fn count_by_status(&self, status: StatusQuarto) -> Result<u64, AppError> {
        Ok(self
            .collection
            .count_documents(doc! { "status": status.as_str() })
            .await?)
    }

    /// Transiciona o único quarto com esse número para o status dado.
    pub async fn set_status(&self, numero: &str, status: StatusQuarto) -> Result<(), AppError> {
        update_exactly_one(
            &self.collection,
            doc! { "numero": numero },
            doc! { "$set": { "status": status.as_str() } },
        )
        .await
    }
}
