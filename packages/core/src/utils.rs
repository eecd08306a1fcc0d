// ABOUTME: Shared utility functions for Tagdeck
// ABOUTME: Identifier generation for user records

use rand::Rng;

/// Length of generated user identifiers
pub const UID_LENGTH: usize = 16;

/// Generate a random alphanumeric user identifier
pub fn generate_uid() -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..UID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_generate_uid() {
        let id1 = generate_uid();
        let id2 = generate_uid();

        assert_eq!(id1.len(), UID_LENGTH);
        assert_ne!(id1, id2);
    }

    #[rstest]
    #[case(1)]
    #[case(10)]
    #[case(100)]
    fn test_generate_uid_is_alphanumeric(#[case] rounds: usize) {
        for _ in 0..rounds {
            assert!(generate_uid().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
