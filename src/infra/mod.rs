//! Инфраструктурный слой вокруг движка:
//! - генерация ID игроков;
//! - RNG-реализации (системный, детерминированный, скриптованный).

pub mod ids;
pub mod rng;

pub use ids::*;
pub use rng::*;
