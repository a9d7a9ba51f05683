//! Cenários ponta a ponta do pipeline administrativo.
//!
//! Precisam de um MongoDB acessível em `MONGODB_URI` (padrão
//! `mongodb://localhost:27017`), por isso ficam atrás de `#[ignore]`.
//! Rode com `cargo test -- --ignored`.

use bson::doc;
use hotel_reservas::config::AppState;
use hotel_reservas::models::{Cliente, Quarto, Reserva, ResumoExecucao};
use hotel_reservas::seed;
use hotel_reservas::services::PipelineService;

async fn executar_pipeline() -> (AppState, ResumoExecucao) {
    let app_state = AppState::new().await.expect("MongoDB acessível");
    let pipeline = PipelineService::new(&app_state);
    let resumo = pipeline.run().await.expect("pipeline completo");
    (app_state, resumo)
}

#[tokio::test]
#[ignore = "precisa de um MongoDB acessível em MONGODB_URI"]
async fn execucao_fria_deixa_o_estado_final_definido() {
    let (_app_state, resumo) = executar_pipeline().await;

    assert_eq!(resumo.banco, "reservas_hotel");
    assert_eq!(resumo.clientes, 4);
    assert_eq!(resumo.quartos, 5);
    assert_eq!(resumo.reservas, 4);
    assert_eq!(resumo.quartos_disponiveis, 4);
    assert_eq!(resumo.reservas_confirmadas, 3);

    // Leituras capturadas antes das mutações; 750.00 e os dois totais
    // de 320.00 ficam acima do limite de 300
    assert_eq!(resumo.leitura_previa.total_clientes, 5);
    assert_eq!(resumo.leitura_previa.quartos_disponiveis, 3);
    assert_eq!(resumo.leitura_previa.reservas_acima_300, 3);
}

#[tokio::test]
#[ignore = "precisa de um MongoDB acessível em MONGODB_URI"]
async fn bairro_novo_preserva_os_campos_irmaos_do_endereco() {
    let (app_state, _resumo) = executar_pipeline().await;

    let clientes = app_state.db.collection::<Cliente>(Cliente::COLLECTION);
    let mariana = clientes
        .find_one(doc! { "nome": "Mariana Souza" })
        .await
        .unwrap()
        .expect("Mariana Souza continua na coleção");

    assert_eq!(mariana.endereco.bairro.as_deref(), Some("Centro"));
    assert_eq!(mariana.endereco.rua, "Rua das Palmeiras");
    assert_eq!(mariana.endereco.numero, 120);
    assert_eq!(mariana.endereco.cidade, "Picos");
}

#[tokio::test]
#[ignore = "precisa de um MongoDB acessível em MONGODB_URI"]
async fn quarto_301_sai_de_manutencao() {
    let (app_state, _resumo) = executar_pipeline().await;

    let quartos = app_state.db.collection::<Quarto>(Quarto::COLLECTION);
    let quarto = quartos
        .find_one(doc! { "numero": "301" })
        .await
        .unwrap()
        .expect("quarto 301 presente");

    assert_eq!(
        quarto.status,
        hotel_reservas::models::StatusQuarto::Disponivel
    );
}

#[tokio::test]
#[ignore = "precisa de um MongoDB acessível em MONGODB_URI"]
async fn quinta_reserva_confirmada_e_paga_via_pix() {
    let (app_state, _resumo) = executar_pipeline().await;

    let reservas = app_state.db.collection::<Reserva>(Reserva::COLLECTION);
    let reserva = reservas
        .find_one(doc! { "_id": seed::oid_reserva(5) })
        .await
        .unwrap()
        .expect("quinta reserva presente");

    assert_eq!(reserva.status, hotel_reservas::models::StatusReserva::Confirmada);
    assert_eq!(
        reserva.forma_pagamento,
        hotel_reservas::models::FormaPagamento::Pix
    );
}

#[tokio::test]
#[ignore = "precisa de um MongoDB acessível em MONGODB_URI"]
async fn quarta_reserva_e_fernanda_sao_removidas() {
    let (app_state, _resumo) = executar_pipeline().await;

    let reservas = app_state.db.collection::<Reserva>(Reserva::COLLECTION);
    let quarta = reservas
        .find_one(doc! { "_id": seed::oid_reserva(4) })
        .await
        .unwrap();
    assert!(quarta.is_none());

    let clientes = app_state.db.collection::<Cliente>(Cliente::COLLECTION);
    let fernanda = clientes
        .find_one(doc! { "cpf": "741.852.963-11" })
        .await
        .unwrap();
    assert!(fernanda.is_none());
}

#[tokio::test]
#[ignore = "precisa de um MongoDB acessível em MONGODB_URI"]
async fn reexecucao_reproduz_o_mesmo_estado_final() {
    let (_app_state, primeira) = executar_pipeline().await;
    let (_app_state, segunda) = executar_pipeline().await;

    assert_eq!(primeira, segunda);
}
