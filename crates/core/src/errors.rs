use thiserror::Error;

use crate::domain::deal::DealId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("no deal with id {0:?}")]
    UnknownDeal(DealId),
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use crate::domain::deal::DealId;

    use super::DomainError;

    #[test]
    fn unknown_deal_names_the_missing_id() {
        let error = DomainError::UnknownDeal(DealId(42));
        assert_eq!(error.to_string(), "no deal with id DealId(42)");
    }
}
