use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Model {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

pub const AVAILABLE_MODELS: [Model; 3] = [
    Model {
        key: "001",
        label: "GPT-4 Nano",
        description: Some("Fast and efficient"),
    },
    Model {
        key: "002",
        label: "GPT-3.5 Turbo",
        description: Some("Balanced performance"),
    },
    Model {
        key: "003",
        label: "Claude 3",
        description: Some("Advanced reasoning"),
    },
];

pub const DEFAULT_MODEL_KEY: &str = "001";

/// The only model that can be routed to the web search endpoint
pub const TURBO_MODEL_KEY: &str = "001";

pub fn find_model(key: &str) -> Option<&'static Model> {
    AVAILABLE_MODELS.iter().find(|m| m.key == key)
}

pub fn is_turbo_capable(key: &str) -> bool {
    key == TURBO_MODEL_KEY
}
