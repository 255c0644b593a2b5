use std::collections::HashMap;

use async_trait::async_trait;
use duel_battle::{
    BaseStats, CreatureCatalog, CreatureTemplate, ElementalType, MemoryCatalog, Move, Stat,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Resolves a creature name or id to its template
///
/// # Example
///
/// ```ignore
/// let catalog = PokeApiCatalog::new(CatalogConfig::from_env())?;
/// let pikachu = catalog.resolve("pikachu").await?;
/// println!("{} is {:?}", pikachu.name, pikachu.types);
/// ```
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn resolve(&self, name_or_id: &str) -> Result<CreatureTemplate, CatalogError>;
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn resolve(&self, name_or_id: &str) -> Result<CreatureTemplate, CatalogError> {
        CreatureCatalog::resolve(self, name_or_id)
            .map_err(|_| CatalogError::NotFound(name_or_id.trim().to_string()))
    }
}

/// Catalog backed by PokeAPI, with an in-process cache
///
/// Every successful lookup is cached under the requested key, the
/// creature's name and its id, so later lookups by any of them skip the
/// network.
pub struct PokeApiCatalog {
    http: reqwest::Client,
    config: CatalogConfig,
    cache: RwLock<HashMap<String, CreatureTemplate>>,
}

impl PokeApiCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Seed the cache with a known template
    pub async fn preload(&self, template: CreatureTemplate) {
        let mut cache = self.cache.write().await;
        cache_under(&mut cache, None, template);
    }

    /// Number of cache keys
    pub async fn cached_keys(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn fetch(&self, key: &str) -> Result<CreatureTemplate, CatalogError> {
        let url = self.config.creature_url(key);
        tracing::info!(key, url = %url, "Fetching creature");

        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(key.to_string()));
        }

        let payload: ApiPokemon = response.error_for_status()?.json().await?;
        payload.into_template(self.config.move_limit)
    }
}

#[async_trait]
impl Catalog for PokeApiCatalog {
    async fn resolve(&self, name_or_id: &str) -> Result<CreatureTemplate, CatalogError> {
        let key = duel_battle::catalog::normalize(name_or_id);
        if key.is_empty() {
            return Err(CatalogError::NotFound(key));
        }

        if let Some(template) = self.cache.read().await.get(&key) {
            tracing::debug!(key = %key, "Catalog cache hit");
            return Ok(template.clone());
        }

        match self.fetch(&key).await {
            Ok(template) => {
                let mut cache = self.cache.write().await;
                cache_under(&mut cache, Some(key), template.clone());
                tracing::info!(name = %template.name, id = template.id, "Cached creature");
                Ok(template)
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Catalog lookup failed");
                Err(e)
            }
        }
    }
}

fn cache_under(
    cache: &mut HashMap<String, CreatureTemplate>,
    requested: Option<String>,
    template: CreatureTemplate,
) {
    if let Some(key) = requested {
        cache.insert(key, template.clone());
    }
    cache.insert(template.id.to_string(), template.clone());
    cache.insert(duel_battle::catalog::normalize(&template.name), template);
}

/// The subset of a PokeAPI `/pokemon/{id}` payload the catalog reads
#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub types: Vec<ApiTypeSlot>,
    pub stats: Vec<ApiStat>,
    #[serde(default)]
    pub abilities: Vec<ApiAbilitySlot>,
    #[serde(default)]
    pub moves: Vec<ApiMoveSlot>,
}

#[derive(Debug, Deserialize)]
pub struct ApiTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: ApiResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiStat {
    pub base_stat: u32,
    pub stat: ApiResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiAbilitySlot {
    pub ability: ApiResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiMoveSlot {
    #[serde(rename = "move")]
    pub move_ref: ApiResource,
}

/// Named reference to another API resource
#[derive(Debug, Deserialize)]
pub struct ApiResource {
    pub name: String,
}

impl ApiPokemon {
    /// Convert to a template, keeping at most `move_limit` moves
    pub fn into_template(self, move_limit: usize) -> Result<CreatureTemplate, CatalogError> {
        let mut slots = self.types;
        slots.sort_by_key(|s| s.slot);
        let types: Vec<ElementalType> = slots
            .iter()
            .filter_map(|s| ElementalType::parse(&s.kind.name))
            .collect();

        let mut stats = BaseStats::default();
        let mut seen = Vec::with_capacity(6);
        for entry in &self.stats {
            if let Some(stat) = Stat::from_catalog(&entry.stat.name) {
                stats.set(stat, entry.base_stat);
                seen.push(stat);
            }
        }
        if let Some(missing) = Stat::ALL.iter().find(|s| !seen.contains(s)) {
            return Err(CatalogError::Decode(format!(
                "{} has no {:?} stat",
                self.name, missing
            )));
        }

        let move_type = types.first().copied().unwrap_or(ElementalType::Normal);
        let moves = self
            .moves
            .iter()
            .take(move_limit)
            .map(|m| Move::new(display_name(&m.move_ref.name), move_type))
            .collect();

        let mut template = CreatureTemplate::new(self.id, title_case(&self.name), types, stats);
        template.abilities = self
            .abilities
            .iter()
            .map(|a| display_name(&a.ability.name))
            .collect();
        template.moves = moves;
        template.height = f64::from(self.height) / 10.0;
        template.weight = f64::from(self.weight) / 10.0;

        Ok(template)
    }
}

/// "thunder-shock" -> "Thunder Shock"
fn display_name(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
