// src/seed.rs
//
// Conjuntos fixos de semente das três coleções e a checagem de
// invariantes que roda antes de qualquer insert. O banco não conhece as
// relações entre as coleções; quem garante a integridade aqui é o
// pipeline, uma única vez, na fronteira do estágio de semeadura.

use std::collections::HashSet;

use bson::oid::ObjectId;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::common::error::AppError;
use crate::models::{
    CategoriaQuarto, Cliente, Endereco, FormaPagamento, Quarto, Reserva, StatusQuarto,
    StatusReserva,
};

const GRUPO_CLIENTES: u8 = 0xf1;
const GRUPO_QUARTOS: u8 = 0xf2;
const GRUPO_RESERVAS: u8 = 0xf3;

pub fn oid_cliente(sequencia: u8) -> ObjectId {
    oid_semente(GRUPO_CLIENTES, sequencia)
}

pub fn oid_quarto(sequencia: u8) -> ObjectId {
    oid_semente(GRUPO_QUARTOS, sequencia)
}

pub fn oid_reserva(sequencia: u8) -> ObjectId {
    oid_semente(GRUPO_RESERVAS, sequencia)
}

// Identificadores opacos de 12 bytes: prefixo fixo, byte de grupo por
// coleção e a sequência no último byte (forma textual 65fX…0NN).
fn oid_semente(grupo: u8, sequencia: u8) -> ObjectId {
    let mut bytes = [0u8; 12];
    bytes[0] = 0x65;
    bytes[1] = grupo;
    bytes[11] = sequencia;
    ObjectId::from_bytes(bytes)
}

fn instante(ano: i32, mes: u32, dia: u32, hora: u32, minuto: u32) -> bson::DateTime {
    let utc = Utc
        .with_ymd_and_hms(ano, mes, dia, hora, minuto, 0)
        .single()
        .expect("data literal de semente fora do calendário");
    bson::DateTime::from_millis(utc.timestamp_millis())
}

fn brl(centavos: i64) -> Decimal {
    Decimal::new(centavos, 2)
}

// ---
// CLIENTES
// ---

pub fn clientes_iniciais() -> Vec<Cliente> {
    vec![
        cliente(
            1,
            "Mariana Souza",
            "123.456.789-00",
            "(89) 99999-1111",
            "mariana.souza@email.com",
            "Rua das Palmeiras",
            120,
            instante(2026, 2, 10, 9, 0),
        ),
        cliente(
            2,
            "Carlos Henrique",
            "987.654.321-00",
            "(89) 99999-2222",
            "carlos.henrique@email.com",
            "Av. Central",
            45,
            instante(2026, 2, 10, 9, 30),
        ),
        cliente(
            3,
            "Ana Paula Lima",
            "456.123.789-55",
            "(89) 99999-3333",
            "ana.paula@email.com",
            "Travessa São José",
            87,
            instante(2026, 2, 11, 8, 20),
        ),
        cliente(
            4,
            "João Pedro Rocha",
            "321.654.987-77",
            "(89) 99999-4444",
            "joaopedro@email.com",
            "Rua Coelho Rodrigues",
            300,
            instante(2026, 2, 11, 10, 15),
        ),
        cliente(
            5,
            "Fernanda Alves",
            "741.852.963-11",
            "(89) 99999-5555",
            "fernanda.alves@email.com",
            "Rua Projetada A",
            19,
            instante(2026, 2, 12, 11, 45),
        ),
    ]
}

fn cliente(
    sequencia: u8,
    nome: &str,
    cpf: &str,
    telefone: &str,
    email: &str,
    rua: &str,
    numero: i32,
    data_cadastro: bson::DateTime,
) -> Cliente {
    Cliente {
        id: oid_cliente(sequencia),
        nome: nome.to_string(),
        cpf: cpf.to_string(),
        telefone: telefone.to_string(),
        email: email.to_string(),
        endereco: Endereco {
            rua: rua.to_string(),
            numero,
            cidade: "Picos".to_string(),
            uf: "PI".to_string(),
            bairro: None,
        },
        data_cadastro,
    }
}

// ---
// QUARTOS
// ---

pub fn quartos_iniciais() -> Vec<Quarto> {
    vec![
        quarto(
            1,
            "101",
            CategoriaQuarto::Standard,
            2,
            brl(14000),
            StatusQuarto::Disponivel,
            &["Ar-condicionado", "Wi-Fi", "TV"],
        ),
        quarto(
            2,
            "102",
            CategoriaQuarto::Standard,
            3,
            brl(16000),
            StatusQuarto::Disponivel,
            &["Ventilador", "Wi-Fi", "TV"],
        ),
        quarto(
            3,
            "201",
            CategoriaQuarto::Luxo,
            2,
            brl(25000),
            StatusQuarto::Ocupado,
            &["Ar-condicionado", "Frigobar", "Wi-Fi", "TV Smart"],
        ),
        quarto(
            4,
            "202",
            CategoriaQuarto::Master,
            4,
            brl(32000),
            StatusQuarto::Disponivel,
            &["Ar-condicionado", "Frigobar", "Wi-Fi", "TV Smart", "Banheira"],
        ),
        quarto(
            5,
            "301",
            CategoriaQuarto::Economico,
            2,
            brl(11000),
            StatusQuarto::Manutencao,
            &["Ventilador", "Wi-Fi"],
        ),
    ]
}

fn quarto(
    sequencia: u8,
    numero: &str,
    tipo: CategoriaQuarto,
    capacidade: i32,
    diaria: Decimal,
    status: StatusQuarto,
    comodidades: &[&str],
) -> Quarto {
    Quarto {
        id: oid_quarto(sequencia),
        numero: numero.to_string(),
        tipo,
        capacidade,
        diaria,
        status,
        comodidades: comodidades.iter().map(|item| item.to_string()).collect(),
    }
}

// ---
// RESERVAS
// ---

// Check-in às 14:00 UTC e check-out às 12:00 UTC em todas as estadias.
pub fn reservas_iniciais() -> Vec<Reserva> {
    vec![
        reserva(
            1,
            1,
            1,
            instante(2026, 2, 20, 14, 0),
            instante(2026, 2, 22, 12, 0),
            2,
            brl(28000),
            StatusReserva::Confirmada,
            FormaPagamento::Pix,
        ),
        reserva(
            2,
            2,
            3,
            instante(2026, 2, 18, 14, 0),
            instante(2026, 2, 21, 12, 0),
            2,
            brl(75000),
            StatusReserva::Hospedado,
            FormaPagamento::CartaoCredito,
        ),
        reserva(
            3,
            3,
            2,
            instante(2026, 2, 25, 14, 0),
            instante(2026, 2, 27, 12, 0),
            3,
            brl(32000),
            StatusReserva::Confirmada,
            FormaPagamento::Dinheiro,
        ),
        reserva(
            4,
            4,
            4,
            instante(2026, 2, 15, 14, 0),
            instante(2026, 2, 16, 12, 0),
            4,
            brl(32000),
            StatusReserva::Finalizada,
            FormaPagamento::Pix,
        ),
        reserva(
            5,
            5,
            5,
            instante(2026, 2, 28, 14, 0),
            instante(2026, 3, 1, 12, 0),
            2,
            brl(11000),
            StatusReserva::Pendente,
            FormaPagamento::CartaoDebito,
        ),
    ]
}

fn reserva(
    sequencia: u8,
    cliente_seq: u8,
    quarto_seq: u8,
    data_checkin: bson::DateTime,
    data_checkout: bson::DateTime,
    qtd_hospedes: i32,
    valor_total: Decimal,
    status: StatusReserva,
    forma_pagamento: FormaPagamento,
) -> Reserva {
    Reserva {
        id: oid_reserva(sequencia),
        cliente_id: oid_cliente(cliente_seq),
        quarto_id: oid_quarto(quarto_seq),
        data_checkin,
        data_checkout,
        qtd_hospedes,
        valor_total,
        status,
        forma_pagamento,
    }
}

// ---
// VALIDAÇÃO DA SEMENTE
// ---

/// Confere todos os invariantes de domínio antes de qualquer insert:
/// formato dos campos, unicidade de cpf e número de quarto, integridade
/// referencial das reservas, ordem temporal, capacidade, precificação e
/// cadastro anterior ao check-in.
pub fn validate_seed_data(
    clientes: &[Cliente],
    quartos: &[Quarto],
    reservas: &[Reserva],
) -> Result<(), AppError> {
    for cliente in clientes {
        cliente.validate()?;
    }
    for quarto in quartos {
        quarto.validate()?;
    }

    checar_unicos(
        clientes.iter().map(|cliente| cliente.cpf.as_str()),
        "cpf duplicado entre clientes",
    )?;
    checar_unicos(
        quartos.iter().map(|quarto| quarto.numero.as_str()),
        "número duplicado entre quartos",
    )?;

    for reserva in reservas {
        reserva.validate()?;

        let identificador = reserva.id.to_hex();

        let cliente = clientes
            .iter()
            .find(|cliente| cliente.id == reserva.cliente_id)
            .ok_or_else(|| {
                AppError::IntegrityViolation(format!(
                    "reserva {identificador} referencia cliente inexistente"
                ))
            })?;

        let quarto = quartos
            .iter()
            .find(|quarto| quarto.id == reserva.quarto_id)
            .ok_or_else(|| {
                AppError::IntegrityViolation(format!(
                    "reserva {identificador} referencia quarto inexistente"
                ))
            })?;

        if reserva.data_checkin >= reserva.data_checkout {
            return Err(AppError::IntegrityViolation(format!(
                "reserva {identificador} tem check-in depois do check-out"
            )));
        }

        if reserva.qtd_hospedes > quarto.capacidade {
            return Err(AppError::IntegrityViolation(format!(
                "reserva {identificador} excede a capacidade do quarto {}",
                quarto.numero
            )));
        }

        let esperado = reserva.valor_esperado(quarto.diaria);
        if reserva.valor_total != esperado {
            return Err(AppError::IntegrityViolation(format!(
                "reserva {identificador} deveria totalizar {esperado}, veio {}",
                reserva.valor_total
            )));
        }

        if cliente.data_cadastro >= reserva.data_checkin {
            return Err(AppError::IntegrityViolation(format!(
                "reserva {identificador} antecede o cadastro do cliente {}",
                cliente.nome
            )));
        }
    }

    Ok(())
}

fn checar_unicos<'a>(
    valores: impl Iterator<Item = &'a str>,
    detalhe: &str,
) -> Result<(), AppError> {
    let mut vistos = HashSet::new();
    for valor in valores {
        if !vistos.insert(valor) {
            return Err(AppError::IntegrityViolation(format!("{detalhe}: {valor}")));
        }
    }
    Ok(())
}
