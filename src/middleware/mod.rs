//! Middleware del servicio

pub mod cors;
