//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! entity types out of the service layer.

pub mod guild_config;

#[cfg(test)]
mod test;
