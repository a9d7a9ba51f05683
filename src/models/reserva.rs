// src/models/reserva.rs

use bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::common::db_utils::decimal_bson;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusReserva {
    Pendente,
    Confirmada,
    Hospedado,
    Finalizada,
    Cancelada,
}

impl StatusReserva {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusReserva::Pendente => "pendente",
            StatusReserva::Confirmada => "confirmada",
            StatusReserva::Hospedado => "hospedado",
            StatusReserva::Finalizada => "finalizada",
            StatusReserva::Cancelada => "cancelada",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormaPagamento {
    Pix,
    CartaoCredito,
    CartaoDebito,
    Dinheiro,
}

impl FormaPagamento {
    pub fn as_str(self) -> &'static str {
        match self {
            FormaPagamento::Pix => "pix",
            FormaPagamento::CartaoCredito => "cartao_credito",
            FormaPagamento::CartaoDebito => "cartao_debito",
            FormaPagamento::Dinheiro => "dinheiro",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Reserva {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub cliente_id: ObjectId,
    pub quarto_id: ObjectId,
    pub data_checkin: bson::DateTime,
    pub data_checkout: bson::DateTime,
    #[validate(range(min = 1))]
    pub qtd_hospedes: i32,
    #[serde(with = "decimal_bson")]
    #[validate(custom(function = validar_valor_monetario))]
    pub valor_total: Decimal,
    pub status: StatusReserva,
    pub forma_pagamento: FormaPagamento,
}

impl Reserva {
    pub const COLLECTION: &'static str = "reservas";

    /// Noites cobradas: períodos de 24h arredondados para cima. A estadia
    /// padrão (check-in 14:00, check-out 12:00) fecha em noites inteiras.
    pub fn noites(&self) -> i64 {
        let duracao_ms =
            self.data_checkout.timestamp_millis() - self.data_checkin.timestamp_millis();
        // Equivalente a `duracao_ms.div_ceil(86_400_000)`; o método em
        // inteiros com sinal ainda é instável (int_roundings).
        let q = duracao_ms / 86_400_000;
        let r = duracao_ms % 86_400_000;
        if r > 0 { q + 1 } else { q }
    }

    /// Total previsto pela tarifa do quarto: diária × noites.
    pub fn valor_esperado(&self, diaria: Decimal) -> Decimal {
        diaria * Decimal::from(self.noites())
    }
}

fn validar_valor_monetario(valor: &Decimal) -> Result<(), ValidationError> {
    if valor.is_sign_negative() {
        return Err(ValidationError::new("valor_negativo"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserva_com_duracao(horas: i64) -> Reserva {
        let checkin = bson::DateTime::from_millis(0);
        let checkout = bson::DateTime::from_millis(horas * 3_600_000);
        Reserva {
            id: ObjectId::from_bytes([0x65, 0xf3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            cliente_id: ObjectId::from_bytes([0x65, 0xf1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            quarto_id: ObjectId::from_bytes([0x65, 0xf2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            data_checkin: checkin,
            data_checkout: checkout,
            qtd_hospedes: 2,
            valor_total: Decimal::new(28000, 2),
            status: StatusReserva::Confirmada,
            forma_pagamento: FormaPagamento::Pix,
        }
    }

    #[test]
    fn estadia_de_duas_noites_conta_duas_noites() {
        // 20/02 14:00 até 22/02 12:00 são 46 horas
        assert_eq!(reserva_com_duracao(46).noites(), 2);
    }

    #[test]
    fn estadia_curta_conta_uma_noite() {
        // 15/02 14:00 até 16/02 12:00 são 22 horas
        assert_eq!(reserva_com_duracao(22).noites(), 1);
    }

    #[test]
    fn estadia_de_tres_noites_conta_tres_noites() {
        assert_eq!(reserva_com_duracao(70).noites(), 3);
    }

    #[test]
    fn valor_esperado_multiplica_diaria_pelas_noites() {
        let reserva = reserva_com_duracao(46);
        assert_eq!(
            reserva.valor_esperado(Decimal::new(14000, 2)),
            Decimal::new(28000, 2)
        );
    }

    #[test]
    fn forma_de_pagamento_grava_em_snake_case() {
        let bson = bson::serialize_to_bson(&FormaPagamento::CartaoCredito).unwrap();
        assert_eq!(bson, bson::Bson::String("cartao_credito".to_string()));
        assert_eq!(FormaPagamento::CartaoDebito.as_str(), "cartao_debito");
    }

    #[test]
    fn status_grava_em_minusculas() {
        let bson = bson::serialize_to_bson(&StatusReserva::Hospedado).unwrap();
        assert_eq!(bson, bson::Bson::String("hospedado".to_string()));
    }

    #[test]
    fn qtd_de_hospedes_zero_e_rejeitada() {
        let mut reserva = reserva_com_duracao(46);
        reserva.qtd_hospedes = 0;
        assert!(reserva.validate().is_err());
    }
}
