//! cajas-picking: conciliación de hojas de inspección contra la tabla de unidades por caja

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod sheet;
pub mod store;
