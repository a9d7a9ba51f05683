// src/services/pipeline_service.rs

use crate::common::error::AppError;
use crate::config::AppState;
use crate::db::{ClienteRepository, QuartoRepository, ReservaRepository};
use crate::models::{FormaPagamento, LeituraPrevia, ResumoExecucao, StatusQuarto, StatusReserva};
use crate::seed;

// Alvos das mutações pontuais do roteiro administrativo.
const CLIENTE_DO_BAIRRO: &str = "Mariana Souza";
const BAIRRO_NOVO: &str = "Centro";
const QUARTO_LIBERADO: &str = "301";
const CPF_REMOVIDO: &str = "741.852.963-11";
const LIMITE_LEITURA: i64 = 300;

/// Orquestra os cinco estágios do roteiro, nesta ordem estrita:
/// limpeza, semeadura, leitura prévia, atualizações, remoções e resumo.
/// Cada estágio só começa depois que o anterior terminou.
pub struct PipelineService {
    nome_banco: String,
    clientes: ClienteRepository,
    quartos: QuartoRepository,
    reservas: ReservaRepository,
}

impl PipelineService {
    pub fn new(app_state: &AppState) -> Self {
        Self {
            nome_banco: app_state.db.name().to_string(),
            clientes: ClienteRepository::new(&app_state.db),
            quartos: QuartoRepository::new(&app_state.db),
            reservas: ReservaRepository::new(&app_state.db),
        }
    }

    pub async fn run(&self) -> Result<ResumoExecucao, AppError> {
        self.reset_collections().await?;
        self.seed_collections().await?;
        let leitura_previa = self.pre_mutation_reads().await?;
        self.apply_updates().await?;
        self.apply_deletes().await?;
        self.build_summary(leitura_previa).await
    }

    // --- 1. LIMPEZA (reexecução idempotente) ---
    async fn reset_collections(&self) -> Result<(), AppError> {
        let clientes = self.clientes.clear().await?;
        let quartos = self.quartos.clear().await?;
        let reservas = self.reservas.clear().await?;

        tracing::info!(
            "🧹 Coleções limpas ({} clientes, {} quartos, {} reservas removidos)",
            clientes,
            quartos,
            reservas
        );
        Ok(())
    }

    // --- 2. SEMEADURA (ordem de dependência: reservas por último) ---
    async fn seed_collections(&self) -> Result<(), AppError> {
        let clientes = seed::clientes_iniciais();
        let quartos = seed::quartos_iniciais();
        let reservas = seed::reservas_iniciais();

        // Os invariantes de domínio são conferidos aqui, de uma vez,
        // antes do primeiro insert; o banco não conhece as relações.
        seed::validate_seed_data(&clientes, &quartos, &reservas)?;

        self.clientes.insert_batch(&clientes).await?;
        self.quartos.insert_batch(&quartos).await?;
        self.reservas.insert_batch(&reservas).await?;

        tracing::info!(
            "🌱 Semente aplicada ({} clientes, {} quartos, {} reservas)",
            clientes.len(),
            quartos.len(),
            reservas.len()
        );
        Ok(())
    }

    // --- 3. LEITURA PRÉVIA (capturada antes de qualquer mutação) ---
    async fn pre_mutation_reads(&self) -> Result<LeituraPrevia, AppError> {
        let leitura = LeituraPrevia {
            total_clientes: self.clientes.count().await?,
            quartos_disponiveis: self
                .quartos
                .count_by_status(StatusQuarto::Disponivel)
                .await?,
            reservas_acima_300: self.reservas.count_total_above(LIMITE_LEITURA).await?,
        };

        tracing::info!(
            "📊 Leitura prévia: {} clientes, {} quartos disponíveis, {} reservas acima de {}",
            leitura.total_clientes,
            leitura.quartos_disponiveis,
            leitura.reservas_acima_300,
            LIMITE_LEITURA
        );
        Ok(leitura)
    }

    // --- 4. ATUALIZAÇÕES (cada uma atinge exatamente um documento) ---
    async fn apply_updates(&self) -> Result<(), AppError> {
        self.clientes
            .set_neighborhood(CLIENTE_DO_BAIRRO, BAIRRO_NOVO)
            .await?;

        self.quartos
            .set_status(QUARTO_LIBERADO, StatusQuarto::Disponivel)
            .await?;

        self.reservas
            .set_status_and_payment(
                seed::oid_reserva(5),
                StatusReserva::Confirmada,
                FormaPagamento::Pix,
            )
            .await?;

        tracing::info!("✏️ Atualizações pontuais aplicadas");
        Ok(())
    }

    // --- 5. REMOÇÕES (sempre depois das atualizações) ---
    async fn apply_deletes(&self) -> Result<(), AppError> {
        tolerate_miss(self.reservas.delete_by_id(seed::oid_reserva(4)).await)?;
        tolerate_miss(self.clientes.delete_by_cpf(CPF_REMOVIDO).await)?;

        tracing::info!("🗑️ Remoções pontuais aplicadas");
        Ok(())
    }

    async fn build_summary(&self, leitura_previa: LeituraPrevia) -> Result<ResumoExecucao, AppError> {
        Ok(ResumoExecucao {
            banco: self.nome_banco.clone(),
            clientes: self.clientes.count().await?,
            quartos: self.quartos.count().await?,
            reservas: self.reservas.count().await?,
            quartos_disponiveis: self
                .quartos
                .count_by_status(StatusQuarto::Disponivel)
                .await?,
            reservas_confirmadas: self
                .reservas
                .count_by_status(StatusReserva::Confirmada)
                .await?,
            leitura_previa,
        })
    }
}

// `DeleteMiss` é o único erro recuperável: numa reexecução sobre um
// banco já mutado o alvo pode não existir mais.
fn tolerate_miss(resultado: Result<(), AppError>) -> Result<(), AppError> {
    match resultado {
        Err(AppError::DeleteMiss {
            collection,
            selector,
        }) => {
            tracing::warn!(
                "Nenhum documento removido de '{}' {} — seguindo adiante",
                collection,
                selector
            );
            Ok(())
        }
        outro => outro,
    }
}
