// src/models/cliente.rs

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Endereço aninhado do cliente. `bairro` não existe na semente e só
/// aparece depois de um update pontual, por isso é opcional e omitido
/// do documento quando ausente.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Endereco {
    pub rua: String,
    pub numero: i32,
    pub cidade: String,
    #[validate(length(equal = 2))]
    pub uf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Cliente {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub nome: String,
    #[validate(custom(function = validar_cpf))]
    pub cpf: String,
    pub telefone: String,
    #[validate(email)]
    pub email: String,
    #[validate(nested)]
    pub endereco: Endereco,
    pub data_cadastro: bson::DateTime,
}

impl Cliente {
    pub const COLLECTION: &'static str = "clientes";
}

// Formato brasileiro NNN.NNN.NNN-NN; os dígitos verificadores não são
// conferidos aqui.
fn validar_cpf(cpf: &str) -> Result<(), ValidationError> {
    let bytes = cpf.as_bytes();
    let formato_ok = bytes.len() == 14
        && bytes
            .iter()
            .enumerate()
            .all(|(posicao, byte)| match posicao {
                3 | 7 => *byte == b'.',
                11 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            });

    if formato_ok {
        Ok(())
    } else {
        Err(ValidationError::new("cpf_formato"))
    }
}
