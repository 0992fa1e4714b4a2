pub mod city;
pub mod picnic;
pub mod registration;
pub mod user;

/// Outcome of an idempotent create: the persisted row and whether this call inserted it.
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted<T> {
    pub value: T,
    pub created: bool,
}

impl<T> Upserted<T> {
    pub fn inserted(value: T) -> Self {
        Self {
            value,
            created: true,
        }
    }

    pub fn existing(value: T) -> Self {
        Self {
            value,
            created: false,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Upserted<U> {
        Upserted {
            value: f(self.value),
            created: self.created,
        }
    }
}
