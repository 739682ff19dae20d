//! Runs in its own process: the first construction installs the custom parts.

use idempotence_token::generator::SequenceToken;
use idempotence_token::store::LockedMapStore;
use idempotence_token::{default_token_service, token_service_with, TokenError};

#[test]
fn custom_store_and_generator_win_when_constructed_first() {
    let custom = token_service_with(
        Box::new(LockedMapStore::new()),
        Box::new(SequenceToken::with_start(1, 2)),
    );

    let token = custom.issue_token();
    assert_eq!(token, "0001-0000000002-0000000000000000");

    let default = default_token_service();
    assert!(std::ptr::eq(custom, default));
    assert_eq!(default.issue_token(), "0001-0000000002-0000000000000001");

    assert_eq!(default.redeem_token(&token), Ok(()));
    assert_eq!(custom.redeem_token(&token), Err(TokenError::NotFound));
}
