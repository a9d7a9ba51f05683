// src/db/cliente_repo.rs

use bson::doc;
use mongodb::{Collection, Database};

use crate::common::db_utils::{bulk_failure_index, delete_exactly_one, update_exactly_one};
use crate::common::error::AppError;
use crate::models::Cliente;

#[derive(Clone)]
pub struct ClienteRepository {
    collection: Collection<Cliente>,
}

impl ClienteRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(Cliente::COLLECTION),
        }
    }

    /// Esvazia a coleção; funciona igual com ela vazia, parcial ou cheia.
    pub async fn clear(&self) -> Result<u64, AppError> {
        let resultado = self.collection.delete_many(doc! {}).await?;
        Ok(resultado.deleted_count)
    }

    pub async fn insert_batch(&self, clientes: &[Cliente]) -> Result<(), AppError> {
        self.collection
            .insert_many(clientes)
            .await
            .map_err(|cause| AppError::SeedFailure {
                collection: Cliente::COLLECTION.to_string(),
                index: bulk_failure_index(&cause),
                cause,
            })?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    /// Acrescenta o bairro ao endereço do único cliente com esse nome,
    /// sem tocar nos campos irmãos do subdocumento.
    pub async fn set_neighborhood(&self, nome: &str, bairro: &str) -> Result<(), AppError> {
        update_exactly_one(
            &self.collection,
            doc! { "nome": nome },
            doc! { "$set": { "endereco.bairro": bairro } },
        )
        .await
    }

    pub async fn delete_by_cpf(&self, cpf: &str) -> Result<(), AppError> {
        delete_exactly_one(&self.collection, doc! { "cpf": cpf }).await
    }
}
