//! Temporary password generation for newly provisioned accounts.
//!
//! [`generate_temporary_password`] draws from the operating system's CSPRNG.
//! [`generate_with`] accepts any [`Rng`]; its output is only as strong as the
//! generator passed in, so seeded or general-purpose generators make it a
//! non-cryptographic utility suitable for tests and fixtures only.

use rand::Rng;
use rand::rngs::OsRng;

/// Characters a generated password is drawn from (70 total).
pub const PASSWORD_ALPHABET: &[u8; 70] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Generate a `length`-character password using the OS CSPRNG.
///
/// A length of zero yields an empty string.
pub fn generate_temporary_password(length: usize) -> String {
    generate_with(&mut OsRng, length)
}

/// [`generate_temporary_password`] with [`DEFAULT_PASSWORD_LENGTH`].
pub fn generate_default_password() -> String {
    generate_temporary_password(DEFAULT_PASSWORD_LENGTH)
}

/// Generate a `length`-character password from `rng`.
///
/// Each character is sampled independently and uniformly, with replacement,
/// from [`PASSWORD_ALPHABET`].
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn in_alphabet(c: char) -> bool {
        c.is_ascii() && PASSWORD_ALPHABET.contains(&(c as u8))
    }

    #[test]
    fn alphabet_has_seventy_distinct_characters() {
        let distinct: HashSet<u8> = PASSWORD_ALPHABET.iter().copied().collect();
        assert_eq!(distinct.len(), 70);
    }

    #[test]
    fn default_length_is_twelve() {
        let password = generate_default_password();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(in_alphabet));
    }

    #[test]
    fn eight_characters_from_alphabet() {
        let password = generate_temporary_password(8);
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(in_alphabet));
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(generate_temporary_password(0), "");
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let a = generate_with(&mut StdRng::seed_from_u64(7), 32);
        let b = generate_with(&mut StdRng::seed_from_u64(7), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn distribution_is_roughly_uniform() {
        // 70_000 draws, ~1000 expected per character.
        let mut rng = StdRng::seed_from_u64(0xadb0a4d);
        let sample = generate_with(&mut rng, 70_000);

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in sample.chars() {
            *counts.entry(c).or_default() += 1;
        }

        assert_eq!(counts.len(), 70, "every character should appear");
        for (c, n) in &counts {
            assert!((800..=1200).contains(n), "{c:?} drawn {n} times");
        }

        let classes = [
            sample.chars().any(|c| c.is_ascii_lowercase()),
            sample.chars().any(|c| c.is_ascii_uppercase()),
            sample.chars().any(|c| c.is_ascii_digit()),
            sample.chars().any(|c| "!@#$%^&*".contains(c)),
        ];
        assert!(classes.iter().all(|present| *present));
    }

    proptest! {
        #[test]
        fn length_and_alphabet_hold(n in 1usize..256, seed in any::<u64>()) {
            let password = generate_with(&mut StdRng::seed_from_u64(seed), n);
            prop_assert_eq!(password.chars().count(), n);
            prop_assert!(password.chars().all(in_alphabet));
        }
    }
}
