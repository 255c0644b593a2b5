mod catalog;
mod config;
mod error;
mod server;

pub use catalog::{
    ApiAbilitySlot, ApiMoveSlot, ApiPokemon, ApiResource, ApiStat, ApiTypeSlot, Catalog,
    PokeApiCatalog,
};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use server::DuelServer;

pub use duel_battle::{BattleEngine, BattleOutcome, CreatureTemplate, MemoryCatalog};
pub use duel_protocol::{ResourceDescriptor, ToolCall, ToolDescriptor};
