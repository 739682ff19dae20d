#[cfg(test)]
mod common;
#[cfg(test)]
mod http_issue_and_redeem;
