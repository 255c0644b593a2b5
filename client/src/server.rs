use anyhow::{Context, Result, anyhow};
use duel_battle::{
    BattleEngine, BattleOutcome, Combatant, CreatureTemplate, Effectiveness, ElementalType,
};
use duel_protocol::{
    ActionSummary, BattleResultSummary, BattleSummary, CreatureSummary, EffectivenessSummary,
    ErrorBody, MOVE_PREVIEW_LEN, MoveSummary, ParseError, ResourceDescriptor, StatBlock, ToolCall,
    ToolDescriptor, parse_resource_uri, parse_tool_call, render, resource_descriptors,
    tool_descriptors,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Tool and resource dispatcher over a catalog and a battle engine
///
/// Every tool call answers with a JSON string. Failures are rendered as
/// `{"error": "..."}` bodies rather than returned to the caller.
///
/// # Example
///
/// ```ignore
/// let catalog = PokeApiCatalog::new(CatalogConfig::from_env())?;
/// let server = DuelServer::new(catalog);
///
/// let body = server
///     .call_tool("simulate_battle", &json!({"pokemon1": "pikachu", "pokemon2": "squirtle"}))
///     .await;
/// println!("{}", body);
/// ```
pub struct DuelServer<C> {
    catalog: C,
    engine: BattleEngine,
    seed: Option<u64>,
}

impl<C: Catalog> DuelServer<C> {
    pub const NAME: &'static str = "pokemon-server";

    /// Server with the standard engine and entropy-seeded battles
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            engine: BattleEngine::new(),
            seed: None,
        }
    }

    pub fn with_engine(mut self, engine: BattleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Seed every battle's random stream with `seed`, making results reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    pub fn list_resources(&self) -> Vec<ResourceDescriptor> {
        resource_descriptors()
    }

    /// Pretty-printed JSON body of a resource
    pub fn read_resource(&self, uri: &str) -> Result<String> {
        let resource = parse_resource_uri(uri)?;
        Ok(render(&resource.body()))
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        tool_descriptors()
    }

    /// Run a tool and return its JSON response
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> String {
        tracing::info!(tool = name, "Tool call");

        let result = match parse_tool_call(name, arguments) {
            Ok(call) => self.dispatch(call).await,
            Err(e) => Err(explain_parse_error(name, e)),
        };

        match result {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(tool = name, error = %format!("{:#}", e), "Tool call failed");
                render(&ErrorBody::new(format!("{:#}", e)))
            }
        }
    }

    async fn dispatch(&self, call: ToolCall) -> Result<String> {
        match call {
            ToolCall::GetCreature { name_or_id } => {
                let summary = self.creature_summary(&name_or_id).await?;
                Ok(render(&summary))
            }
            ToolCall::SimulateBattle {
                first,
                second,
                first_level,
                second_level,
            } => {
                let summary = self
                    .battle_summary((first.as_str(), first_level), (second.as_str(), second_level))
                    .await?;
                Ok(render(&summary))
            }
            ToolCall::TypeEffectiveness {
                attacking,
                defending,
            } => Ok(render(&self.effectiveness_summary(&attacking, &defending)?)),
        }
    }

    async fn resolve(&self, name_or_id: &str, context: &'static str) -> Result<CreatureTemplate> {
        match self.catalog.resolve(name_or_id).await {
            Ok(template) => Ok(template),
            Err(CatalogError::NotFound(_)) => Err(anyhow!("Pokemon '{}' not found", name_or_id)),
            Err(e) => Err(anyhow::Error::new(e).context(context)),
        }
    }

    async fn creature_summary(&self, name_or_id: &str) -> Result<CreatureSummary> {
        let template = self.resolve(name_or_id, "Error fetching Pokemon").await?;
        Ok(summarize_creature(&template))
    }

    async fn battle_summary(&self, first: (&str, i64), second: (&str, i64)) -> Result<BattleSummary> {
        const CONTEXT: &str = "Error simulating battle";

        let (first_template, second_template) = tokio::join!(
            self.resolve(first.0, CONTEXT),
            self.resolve(second.0, CONTEXT)
        );

        let first = Combatant::new(first_template?, first.1).context(CONTEXT)?;
        let second = Combatant::new(second_template?, second.1).context(CONTEXT)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let outcome = self.engine.simulate(first, second, &mut rng);

        Ok(summarize_battle(&outcome))
    }

    fn effectiveness_summary(&self, attacking: &str, defending: &str) -> Result<EffectivenessSummary> {
        let parse = |s: &str| ElementalType::parse(s).ok_or_else(|| anyhow!("Unknown type: {}", s));
        let attacking = parse(attacking)?;
        let defending = parse(defending)?;

        let multiplier = self.engine.table().lookup(attacking, defending);
        Ok(EffectivenessSummary {
            attacking_type: attacking.as_str().to_string(),
            defending_type: defending.as_str().to_string(),
            effectiveness_multiplier: multiplier,
            effect: Effectiveness::from_multiplier(multiplier)
                .description()
                .to_string(),
        })
    }
}

/// Turn a parse failure into the message callers see
fn explain_parse_error(tool: &str, error: anyhow::Error) -> anyhow::Error {
    let Some(ParseError::MissingArgument(_)) = error.downcast_ref::<ParseError>() else {
        return error;
    };

    match tool.trim() {
        ToolCall::GET_CREATURE => anyhow!("Pokemon name or ID is required"),
        ToolCall::SIMULATE_BATTLE => anyhow!("Both Pokemon names are required"),
        ToolCall::TYPE_EFFECTIVENESS => anyhow!("Both attacking and defending types are required"),
        _ => error,
    }
}

fn summarize_creature(template: &CreatureTemplate) -> CreatureSummary {
    let stats = &template.stats;

    CreatureSummary {
        name: template.name.clone(),
        id: template.id,
        types: template.types.iter().map(|t| t.id().to_string()).collect(),
        stats: StatBlock {
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            special_attack: stats.special_attack,
            special_defense: stats.special_defense,
            speed: stats.speed,
        },
        abilities: template.abilities.clone(),
        height: format!("{:?}m", template.height),
        weight: format!("{:?}kg", template.weight),
        moves: template
            .moves
            .iter()
            .take(MOVE_PREVIEW_LEN)
            .map(|m| MoveSummary {
                name: m.name.clone(),
                move_type: m.move_type.id().to_string(),
                power: m.power,
                accuracy: m.accuracy,
            })
            .collect(),
    }
}

fn summarize_battle(outcome: &BattleOutcome) -> BattleSummary {
    let actions = outcome
        .log()
        .iter()
        .map(|entry| {
            ActionSummary::new(
                entry.turn,
                (entry.attacker.as_str(), entry.attacker_hp),
                (entry.defender.as_str(), entry.defender_hp),
                &entry.move_name,
                entry.damage,
                entry.message.clone(),
            )
        })
        .collect();

    BattleSummary::new(
        BattleResultSummary {
            winner: outcome.winner().to_string(),
            loser: outcome.loser().to_string(),
            total_turns: outcome.total_turns(),
        },
        actions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_battle::{BaseStats, MemoryCatalog, Move, TURN_CAP};
    use serde_json::json;

    fn template(
        id: u32,
        name: &str,
        t: ElementalType,
        stats: BaseStats,
        moves: &[&str],
    ) -> CreatureTemplate {
        let mut template = CreatureTemplate::new(id, name, vec![t], stats);
        template.abilities = vec!["Static".to_string()];
        template.moves = moves.iter().map(|m| Move::new(*m, t)).collect();
        template.height = 0.4;
        template.weight = 6.0;
        template
    }

    fn server() -> DuelServer<MemoryCatalog> {
        let catalog = MemoryCatalog::new()
            .with(template(
                25,
                "Pikachu",
                ElementalType::Electric,
                BaseStats::new(35, 55, 40, 50, 50, 90),
                &["Thunder Shock", "Quick Attack", "Tail Whip", "Growl", "Thunder Wave", "Slam"],
            ))
            .with(template(
                4,
                "Charmander",
                ElementalType::Fire,
                BaseStats::new(39, 52, 43, 60, 50, 65),
                &["Scratch", "Ember"],
            ));
        DuelServer::new(catalog).with_seed(7)
    }

    async fn call(server: &DuelServer<MemoryCatalog>, tool: &str, args: Value) -> Value {
        serde_json::from_str(&server.call_tool(tool, &args).await).unwrap()
    }

    #[test]
    fn test_listings() {
        let server = server();
        assert_eq!(server.list_resources().len(), 2);
        assert_eq!(server.list_tools().len(), 3);
    }

    #[test]
    fn test_read_resource() {
        let server = server();
        let body: Value = serde_json::from_str(&server.read_resource("pokemon://pokedex").unwrap()).unwrap();
        assert_eq!(body["description"], "Digital Pokemon encyclopedia");
        assert!(server.read_resource("pokemon://nowhere").is_err());
    }

    #[tokio::test]
    async fn test_get_pokemon() {
        let body = call(&server(), "get_pokemon", json!({"name_or_id": "Pikachu"})).await;

        assert_eq!(body["name"], "Pikachu");
        assert_eq!(body["id"], 25);
        assert_eq!(body["types"], json!(["electric"]));
        assert_eq!(body["stats"]["speed"], 90);
        assert_eq!(body["height"], "0.4m");
        assert_eq!(body["weight"], "6.0kg");
        assert_eq!(body["moves"].as_array().map(Vec::len), Some(5));
        assert_eq!(body["moves"][0]["type"], "electric");
    }

    #[tokio::test]
    async fn test_get_pokemon_errors() {
        let server = server();
        assert_eq!(
            call(&server, "get_pokemon", json!({})).await,
            json!({"error": "Pokemon name or ID is required"})
        );
        assert_eq!(
            call(&server, "get_pokemon", json!({"name_or_id": "mewtwo"})).await,
            json!({"error": "Pokemon 'mewtwo' not found"})
        );
    }

    #[tokio::test]
    async fn test_simulate_battle_summary() {
        let server = server();
        let args = json!({"pokemon1": "pikachu", "pokemon2": "charmander"});
        let raw = server.call_tool("simulate_battle", &args).await;
        let body: Value = serde_json::from_str(&raw).unwrap();

        let result = &body["battle_result"];
        let winner = result["winner"].as_str().unwrap();
        assert!(["Pikachu", "Charmander", "Draw"].contains(&winner));
        assert!(result["total_turns"].as_u64().unwrap() <= u64::from(TURN_CAP));

        let log = body["battle_log"].as_array().unwrap();
        assert!(!log.is_empty() && log.len() <= 10);
        assert_eq!(log[0]["turn"], 1);
        assert!(log[0]["action"].as_str().unwrap().contains(" used Tackle on "));
        assert!(body["note"].as_str().unwrap().starts_with("Showing first 10 of "));

        // Fixed seed: same request, same answer
        assert_eq!(server.call_tool("simulate_battle", &args).await, raw);
    }

    #[tokio::test]
    async fn test_simulate_battle_errors() {
        let server = server();
        assert_eq!(
            call(&server, "simulate_battle", json!({"pokemon1": "pikachu"})).await,
            json!({"error": "Both Pokemon names are required"})
        );
        assert_eq!(
            call(&server, "simulate_battle", json!({"pokemon1": "pikachu", "pokemon2": "eevee"})).await,
            json!({"error": "Pokemon 'eevee' not found"})
        );

        let body = call(
            &server,
            "simulate_battle",
            json!({"pokemon1": "pikachu", "pokemon2": "charmander", "level1": 0}),
        )
        .await;
        assert_eq!(
            body["error"],
            "Error simulating battle: Invalid level 0: level must be positive"
        );
    }

    #[tokio::test]
    async fn test_type_effectiveness() {
        let server = server();
        let body = call(
            &server,
            "get_type_effectiveness",
            json!({"attacking_type": "fire", "defending_type": "GRASS"}),
        )
        .await;
        assert_eq!(
            body,
            json!({
                "attacking_type": "Fire",
                "defending_type": "Grass",
                "effectiveness_multiplier": 2.0,
                "effect": "Super effective! (2x damage)"
            })
        );

        let immune = call(
            &server,
            "get_type_effectiveness",
            json!({"attacking_type": "electric", "defending_type": "ground"}),
        )
        .await;
        assert_eq!(immune["effect"], "No effect! (0x damage)");

        let neutral = call(
            &server,
            "get_type_effectiveness",
            json!({"attacking_type": "ghost", "defending_type": "fire"}),
        )
        .await;
        assert_eq!(neutral["effectiveness_multiplier"], 1.0);
    }

    #[tokio::test]
    async fn test_type_effectiveness_errors() {
        let server = server();
        assert_eq!(
            call(&server, "get_type_effectiveness", json!({"attacking_type": "fire"})).await,
            json!({"error": "Both attacking and defending types are required"})
        );
        assert_eq!(
            call(
                &server,
                "get_type_effectiveness",
                json!({"attacking_type": "fire", "defending_type": "shadow"})
            )
            .await,
            json!({"error": "Unknown type: shadow"})
        );
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        assert_eq!(
            call(&server(), "evolve", json!({})).await,
            json!({"error": "Unknown tool: evolve"})
        );
    }
}
