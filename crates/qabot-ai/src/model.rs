//! Models selectable at initialization.

use std::fmt;
use std::str::FromStr;

use crate::AiError;

/// Chat model offered by the initialize action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelId {
    #[default]
    Gpt4,
    Gpt4o,
    Gpt35Turbo,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [ModelId::Gpt4, ModelId::Gpt4o, ModelId::Gpt35Turbo];

    /// Identifier sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::Gpt4 => "gpt-4",
            ModelId::Gpt4o => "gpt-4o",
            ModelId::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ModelId::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| AiError::Unsupported(format!("unknown model '{}'", s.trim())))
    }
}
