// src/models/quarto.rs

use bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::db_utils::decimal_bson;

// Os valores gravados no banco são os nomes em português, com acento
// onde o hotel usa acento.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoriaQuarto {
    Standard,
    Luxo,
    Master,
    #[serde(rename = "Econômico")]
    Economico,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusQuarto {
    Disponivel,
    Ocupado,
    Manutencao,
}

impl StatusQuarto {
    /// Valor textual gravado no documento; também usado nos filtros.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusQuarto::Disponivel => "disponivel",
            StatusQuarto::Ocupado => "ocupado",
            StatusQuarto::Manutencao => "manutencao",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Quarto {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub numero: String,
    pub tipo: CategoriaQuarto,
    #[validate(range(min = 1))]
    pub capacidade: i32,
    // Diária em BRL com duas casas; vai ao banco como Decimal128.
    #[serde(with = "decimal_bson")]
    #[validate(custom(function = validar_valor_monetario))]
    pub diaria: Decimal,
    pub status: StatusQuarto,
    #[validate(custom(function = validar_comodidades))]
    pub comodidades: Vec<String>,
}

impl Quarto {
    pub const COLLECTION: &'static str = "quartos";
}

fn validar_valor_monetario(valor: &Decimal) -> Result<(), ValidationError> {
    if valor.is_sign_negative() {
        return Err(ValidationError::new("valor_negativo"));
    }
    Ok(())
}

// Sequência ordenada sem duplicatas.
fn validar_comodidades(comodidades: &[String]) -> Result<(), ValidationError> {
    for (posicao, comodidade) in comodidades.iter().enumerate() {
        if comodidades[..posicao].contains(comodidade) {
            return Err(ValidationError::new("comodidade_duplicada"));
        }
    }
    Ok(())
}
