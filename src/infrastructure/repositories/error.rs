use crate::domain::errors::DomainError;
use std::sync::PoisonError;

pub fn map_poisoned<G>(store: &'static str) -> impl FnOnce(PoisonError<G>) -> DomainError {
    move |_| DomainError::provider(format!("{store} store lock poisoned"))
}
