// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., R_K7NP3X for reservations)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// Reservation (R_)
    Reservation,
    /// User (U_)
    User,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Reservation => "R",
            EntityPrefix::User => "U",
        }
    }
}

/// Generate a prefixed ID with 6 random Crockford Base32 characters
pub fn generate_id(prefix: EntityPrefix) -> String {
    let mut rng = rand::thread_rng();
    let random_part: String = (0..6)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect();

    format!("{}_{}", prefix.as_str(), random_part)
}

/// Generate a Reservation ID (R_XXXXXX)
pub fn generate_reservation_id() -> String {
    generate_id(EntityPrefix::Reservation)
}

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_format() {
        let reservation_id = generate_reservation_id();
        assert!(reservation_id.starts_with("R_"));
        assert_eq!(reservation_id.len(), 8); // "R_" + 6 chars

        let user_id = generate_user_id();
        assert!(user_id.starts_with("U_"));
        assert_eq!(user_id.len(), 8);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let id = generate_reservation_id();
        let random_part = &id[2..]; // Skip "R_"

        for c in random_part.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }

        // Verify no ambiguous characters
        assert!(!random_part.contains('I'));
        assert!(!random_part.contains('L'));
        assert!(!random_part.contains('O'));
        assert!(!random_part.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let id = generate_reservation_id();
            assert!(ids.insert(id), "Duplicate ID generated");
        }
    }
}
