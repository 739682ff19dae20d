//! Token generators. Uniqueness is the only contract: with overwhelming
//! probability no two `build` calls return the same string.

pub mod sequence;
pub mod uuid_token;

use serde::Deserialize;

pub use sequence::SequenceToken;
pub use uuid_token::{UuidV4Token, UuidV7Token};

pub trait TokenBuilder: Send + Sync {
    fn build(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    #[default]
    UuidV7,
    UuidV4,
    Sequence,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::UuidV7 => "uuid_v7",
            GeneratorKind::UuidV4 => "uuid_v4",
            GeneratorKind::Sequence => "sequence",
        }
    }
}

/// Build the configured generator. `node_id` only applies to `Sequence`.
pub fn build_generator(kind: GeneratorKind, node_id: Option<u16>) -> Box<dyn TokenBuilder> {
    match kind {
        GeneratorKind::UuidV7 => Box::new(UuidV7Token),
        GeneratorKind::UuidV4 => Box::new(UuidV4Token),
        GeneratorKind::Sequence => Box::new(SequenceToken::new(node_id.unwrap_or_default())),
    }
}
