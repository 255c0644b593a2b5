use thiserror::Error;

pub mod resource;
pub mod response;
pub mod tool;

pub use resource::{ResourceDescriptor, ResourceUri, parse_resource_uri, resource_descriptors};
pub use response::{
    ActionSummary, BattleResultSummary, BattleSummary, CreatureSummary, EffectivenessSummary,
    ErrorBody, LOG_PREVIEW_LEN, MOVE_PREVIEW_LEN, MoveSummary, StatBlock, render,
};
pub use tool::{DEFAULT_LEVEL, ToolCall, ToolDescriptor, parse_tool_call, tool_descriptors};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Unknown resource URI: {0}")]
    UnknownResource(String),
}
