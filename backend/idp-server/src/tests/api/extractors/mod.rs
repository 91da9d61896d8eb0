mod bearer_claims;
