pub mod bearer_claims;
