// src/models/relatorio.rs

use std::fmt;

/// Agregados capturados no estágio de consulta, antes de qualquer
/// mutação. Viajam intactos até o resumo final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeituraPrevia {
    pub total_clientes: u64,
    pub quartos_disponiveis: u64,
    pub reservas_acima_300: u64,
}

/// Relatório impresso no stdout ao fim do pipeline: contagens
/// pós-mutação seguidas das leituras prévias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumoExecucao {
    pub banco: String,
    pub clientes: u64,
    pub quartos: u64,
    pub reservas: u64,
    pub quartos_disponiveis: u64,
    pub reservas_confirmadas: u64,
    pub leitura_previa: LeituraPrevia,
}

impl fmt::Display for ResumoExecucao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- RESUMO EXECUÇÃO ---")?;
        writeln!(f, "DB: {}", self.banco)?;
        writeln!(f, "Clientes: {}", self.clientes)?;
        writeln!(f, "Quartos: {}", self.quartos)?;
        writeln!(f, "Reservas: {}", self.reservas)?;
        writeln!(f, "Quartos disponíveis: {}", self.quartos_disponiveis)?;
        writeln!(f, "Reservas confirmadas: {}", self.reservas_confirmadas)?;
        writeln!(
            f,
            "Leitura prévia - totalClientes: {}",
            self.leitura_previa.total_clientes
        )?;
        writeln!(
            f,
            "Leitura prévia - quartosDisponiveis: {}",
            self.leitura_previa.quartos_disponiveis
        )?;
        writeln!(
            f,
            "Leitura prévia - reservasAcima300: {}",
            self.leitura_previa.reservas_acima_300
        )
    }
}
