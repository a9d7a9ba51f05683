use bson::Document;
use mongodb::Collection;

use crate::common::error::AppError;

// ---
// Helpers de mutação pontual: o contrato é "exatamente um documento"
// ---

/// Conta os documentos que casam com o seletor e só então aplica o
/// `update_one`. Zero ou mais de um viram `UpdateAmbiguous`.
pub async fn update_exactly_one<T>(
    collection: &Collection<T>,
    selector: Document,
    change: Document,
) -> Result<(), AppError>
where
    T: Send + Sync,
{
    let matched = collection.count_documents(selector.clone()).await?;
    if matched != 1 {
        return Err(AppError::UpdateAmbiguous {
            collection: collection.name().to_string(),
            selector: selector.to_string(),
            match_count: matched,
        });
    }

    collection.update_one(selector, change).await?;
    Ok(())
}

/// Remove um único documento; zero remoções viram `DeleteMiss`
/// (recuperável — o chamador decide se tolera).
pub async fn delete_exactly_one<T>(
    collection: &Collection<T>,
    selector: Document,
) -> Result<(), AppError>
where
    T: Send + Sync,
{
    let resultado = collection.delete_one(selector.clone()).await?;
    if resultado.deleted_count == 0 {
        return Err(AppError::DeleteMiss {
            collection: collection.name().to_string(),
            selector: selector.to_string(),
        });
    }
    Ok(())
}

/// Índice do documento rejeitado num `insert_many`, quando o driver informa.
pub fn bulk_failure_index(erro: &mongodb::error::Error) -> usize {
    match erro.kind.as_ref() {
        mongodb::error::ErrorKind::InsertMany(falha) => falha
            .write_errors
            .as_ref()
            .and_then(|erros| erros.first())
            .map(|erro| erro.index)
            .unwrap_or(0),
        _ => 0,
    }
}

pub mod decimal_bson {
    //! Ponte serde entre `rust_decimal::Decimal` e o `Decimal128` do BSON.
    //! Valores monetários nunca passam por ponto flutuante binário.

    use bson::Decimal128;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(valor: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let decimal128: Decimal128 = valor
            .to_string()
            .parse()
            .map_err(serde::ser::Error::custom)?;
        decimal128.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bruto = Decimal128::deserialize(deserializer)?;
        let texto = bruto.to_string();
        texto
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(&texto))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Preco {
        #[serde(with = "super::decimal_bson")]
        valor: Decimal,
    }

    #[test]
    fn decimal_vira_decimal128_no_bson() {
        let preco = Preco {
            valor: Decimal::new(14000, 2),
        };

        let doc = bson::serialize_to_document(&preco).unwrap();
        assert!(matches!(doc.get("valor"), Some(bson::Bson::Decimal128(_))));
    }

    #[test]
    fn decimal_roundtrip_preserva_escala() {
        let preco = Preco {
            valor: Decimal::new(14000, 2),
        };

        let doc = bson::serialize_to_document(&preco).unwrap();
        let de_volta: Preco = bson::deserialize_from_document(doc).unwrap();

        assert_eq!(de_volta.valor, Decimal::new(14000, 2));
        assert_eq!(de_volta.valor.to_string(), "140.00");
    }

    #[test]
    fn somas_monetarias_sao_exatas() {
        let valores = ["280.00", "750.00", "320.00", "320.00", "110.00"];
        let soma: Decimal = valores
            .iter()
            .map(|valor| valor.parse::<Decimal>().unwrap())
            .sum();

        assert_eq!(soma.to_string(), "1780.00");
    }
}
