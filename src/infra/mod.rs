//! Инфраструктурный слой вокруг реестра:
//! - генерация ID;
//! - источник времени для проводок.

pub mod clock;
pub mod ids;

pub use clock::*;
pub use ids::*;
