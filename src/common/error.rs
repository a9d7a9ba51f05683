use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Só `DeleteMiss` é recuperável; qualquer outra variante encerra o
// pipeline antes dos estágios seguintes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Banco de dados indisponível: {0}")]
    BackendUnavailable(#[source] mongodb::error::Error),

    #[error("Falha ao semear '{collection}' (documento {index})")]
    SeedFailure {
        collection: String,
        index: usize,
        #[source]
        cause: mongodb::error::Error,
    },

    #[error("Seleção ambígua em '{collection}' {selector}: {match_count} documentos correspondem")]
    UpdateAmbiguous {
        collection: String,
        selector: String,
        match_count: u64,
    },

    #[error("Nenhum documento removido de '{collection}' {selector}")]
    DeleteMiss {
        collection: String,
        selector: String,
    },

    #[error("Erro de validação na semente")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Integridade violada na semente: {0}")]
    IntegrityViolation(String),

    // Variante genérica para qualquer outro erro do driver.
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] mongodb::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_ambiguous_descreve_selecao_e_contagem() {
        let erro = AppError::UpdateAmbiguous {
            collection: "clientes".to_string(),
            selector: "{ \"nome\": \"Mariana Souza\" }".to_string(),
            match_count: 0,
        };

        let mensagem = erro.to_string();
        assert!(mensagem.contains("clientes"));
        assert!(mensagem.contains("Mariana Souza"));
        assert!(mensagem.contains("0 documentos"));
    }

    #[test]
    fn delete_miss_aponta_colecao_e_seletor() {
        let erro = AppError::DeleteMiss {
            collection: "reservas".to_string(),
            selector: "{ \"_id\": ObjectId(\"65f300000000000000000004\") }".to_string(),
        };

        let mensagem = erro.to_string();
        assert!(mensagem.contains("reservas"));
        assert!(mensagem.contains("65f300000000000000000004"));
    }

    #[test]
    fn integridade_carrega_o_detalhe() {
        let erro = AppError::IntegrityViolation("reserva sem cliente".to_string());
        assert_eq!(
            erro.to_string(),
            "Integridade violada na semente: reserva sem cliente"
        );
    }
}
