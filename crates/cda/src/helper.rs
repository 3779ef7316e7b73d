//! Small conveniences for building documents.

use crate::data_type::InstanceIdentifier;
use uuid::Uuid;

/// Returns an identifier rooted in a freshly generated UUID.
pub fn random_identifier() -> InstanceIdentifier {
    InstanceIdentifier::new(Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_identifiers_are_distinct() {
        let a = random_identifier();
        let b = random_identifier();
        assert_ne!(a.root(), b.root());
        assert_eq!(a.root().len(), 36);
    }
}
