//! Fixed catalog of refinement intents.
//!
//! The set is closed: every intent the client can send is listed in
//! [`INTENTS`], in display order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyph used when an identifier is not in the catalog.
pub const FALLBACK_ICON: &str = "📝";

/// Declared purpose a prompt is refined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentId {
    ImageGeneration,
    CodeGeneration,
    Research,
    #[default]
    GeneralKnowledge,
    LatestInfo,
}

/// Display metadata for a single intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentOption {
    pub id: IntentId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// All intents in display order.
pub const INTENTS: [IntentOption; 5] = [
    IntentOption {
        id: IntentId::ImageGeneration,
        label: "Image Generation",
        icon: "🎨",
    },
    IntentOption {
        id: IntentId::CodeGeneration,
        label: "Code Generation",
        icon: "💻",
    },
    IntentOption {
        id: IntentId::Research,
        label: "Research",
        icon: "🔬",
    },
    IntentOption {
        id: IntentId::GeneralKnowledge,
        label: "General Knowledge",
        icon: "📚",
    },
    IntentOption {
        id: IntentId::LatestInfo,
        label: "Latest Information",
        icon: "📰",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown intent '{0}'")]
pub struct UnknownIntent(pub String);

impl IntentId {
    /// Wire identifier (e.g. `image_generation`).
    pub fn as_str(self) -> &'static str {
        match self {
            IntentId::ImageGeneration => "image_generation",
            IntentId::CodeGeneration => "code_generation",
            IntentId::Research => "research",
            IntentId::GeneralKnowledge => "general_knowledge",
            IntentId::LatestInfo => "latest_info",
        }
    }

    pub fn option(self) -> &'static IntentOption {
        // Catalog order matches declaration order.
        &INTENTS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.option().label
    }

    pub fn icon(self) -> &'static str {
        self.option().icon
    }
}

impl fmt::Display for IntentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentId {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find(s)
            .map(|option| option.id)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

/// Look up an intent by its wire identifier.
pub fn find(id: &str) -> Option<&'static IntentOption> {
    INTENTS.iter().find(|option| option.id.as_str() == id)
}

/// Label for `id`, or the raw identifier if it is not in the catalog.
pub fn label_of(id: &str) -> &str {
    match find(id) {
        Some(option) => option.label,
        None => id,
    }
}

/// Icon for `id`, or [`FALLBACK_ICON`] if it is not in the catalog.
pub fn icon_of(id: &str) -> &'static str {
    find(id).map_or(FALLBACK_ICON, |option| option.icon)
}
