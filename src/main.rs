// src/main.rs

use hotel_reservas::common::error::AppError;
use hotel_reservas::config::AppState;
use hotel_reservas::services::PipelineService;

#[tokio::main]
async fn main() {
    // Logs vão para stderr; o stdout fica reservado ao resumo final.
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    if let Err(erro) = executar().await {
        tracing::error!("🔥 Pipeline abortado: {erro}");
        std::process::exit(1);
    }
}

async fn executar() -> Result<(), AppError> {
    let app_state = AppState::new().await?;

    let pipeline = PipelineService::new(&app_state);
    let resumo = pipeline.run().await?;

    print!("{resumo}");
    Ok(())
}
