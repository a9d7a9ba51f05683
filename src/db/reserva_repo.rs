// src/db/reserva_repo.rs

use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::common::db_utils::{bulk_failure_index, delete_exactly_one, update_exactly_one};
use crate::common::error::AppError;
use crate::models::{FormaPagamento, Reserva, StatusReserva};

#[derive(Clone)]
pub struct ReservaRepository {
    collection: Collection<Reserva>,
}

impl ReservaRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(Reserva::COLLECTION),
        }
    }

    pub async fn clear(&self) -> Result<u64, AppError> {
        let resultado = self.collection.delete_many(doc! {}).await?;
        Ok(resultado.deleted_count)
    }

    pub async fn insert_batch(&self, reservas: &[Reserva]) -> Result<(), AppError> {
        self.collection
            .insert_many(reservas)
            .await
            .map_err(|cause| AppError::SeedFailure {
                collection: Reserva::COLLECTION.to_string(),
                index: bulk_failure_index(&cause),
                cause,
            })?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    pub async fn count_by_status(&self, status: StatusReserva) -> Result<u64, AppError> {
        Ok(self
            .collection
            .count_documents(doc! { "status": status.as_str() })
            .await?)
    }

    /// Reservas com valor total acima do limite. O Decimal128 gravado no
    /// documento compara numericamente com o literal inteiro do filtro.
    pub async fn count_total_above(&self, limite: i64) -> Result<u64, AppError> {
        Ok(self
            .collection
            .count_documents(doc! { "valor_total": { "$gt": limite } })
            .await?)
    }

    pub async fn set_status_and_payment(
        &self,
        id: ObjectId,
        status: StatusReserva,
        forma_pagamento: FormaPagamento,
    ) -> Result<(), AppError> {
        update_exactly_one(
            &self.collection,
            doc! { "_id": id },
            doc! { "$set": {
                "status": status.as_str(),
                "forma_pagamento": forma_pagamento.as_str(),
            } },
        )
        .await
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<(), AppError> {
        delete_exactly_one(&self.collection, doc! { "_id": id }).await
    }
}
