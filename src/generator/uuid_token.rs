use uuid::Uuid;

use crate::generator::TokenBuilder;

/// Time-ordered UUID (v7). Default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Token;

impl TokenBuilder for UuidV7Token {
    fn build(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Random UUID (v4).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Token;

impl TokenBuilder for UuidV4Token {
    fn build(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn v7_tokens_parse_back_as_v7() {
        let token = UuidV7Token.build();
        let parsed = Uuid::parse_str(&token).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn v4_tokens_are_distinct() {
        let tokens: HashSet<String> = (0..1000).map(|_| UuidV4Token.build()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
