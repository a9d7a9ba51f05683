pub mod cliente;
pub mod quarto;
pub mod relatorio;
pub mod reserva;

pub use cliente::{Cliente, Endereco};
pub use quarto::{CategoriaQuarto, Quarto, StatusQuarto};
pub use relatorio::{LeituraPrevia, ResumoExecucao};
pub use reserva::{FormaPagamento, Reserva, StatusReserva};
