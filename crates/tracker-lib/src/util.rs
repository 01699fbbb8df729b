//! ID generation.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Default prefix for generated issue IDs.
pub const DEFAULT_ID_PREFIX: &str = "iss";

/// Inputs that seed one generated ID.
#[derive(Debug, Clone, Copy)]
pub struct IdSeed<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    /// Store-local counter, distinct for every create call.
    pub sequence: u64,
}

/// Generate a unique issue ID with the given prefix.
///
/// Uses SHA256 hashing with base36 encoding. The `taken` closure must
/// report every ID that is live or was ever handed out, so deleted IDs
/// are never reissued.
pub fn generate_id<F>(prefix: &str, seed: IdSeed<'_>, issue_count: usize, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut length = optimal_hash_length(issue_count);

    loop {
        for nonce in 0..10 {
            let hash_str = compute_id_hash(&id_seed(seed, nonce), length);
            let id = format!("{prefix}-{hash_str}");
            if !taken(&id) {
                return id;
            }
        }

        if length < 8 {
            length += 1;
        } else {
            // Fallback: use longer hash with increasing nonces
            let mut nonce = 10u32;
            loop {
                let hash_str = compute_id_hash(&id_seed(seed, nonce), 12);
                let id = format!("{prefix}-{hash_str}");
                if !taken(&id) {
                    return id;
                }
                nonce += 1;
                if nonce > 1000 {
                    let id = format!("{prefix}-{hash_str}{}", seed.sequence);
                    if !taken(&id) {
                        return id;
                    }
                }
            }
        }
    }
}

/// Compute the optimal hash length for a given issue count.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn optimal_hash_length(issue_count: usize) -> usize {
    let n = issue_count as f64;
    let max_prob = 0.25;

    for (len, exp) in [(5_usize, 5_i32), (6, 6), (7, 7), (8, 8)] {
        let space = 36_f64.powi(exp);
        let prob = 1.0 - (-n * n / (2.0 * space)).exp();
        if prob < max_prob {
            return len;
        }
    }
    8
}

fn id_seed(seed: IdSeed<'_>, nonce: u32) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        seed.title,
        seed.description.unwrap_or(""),
        seed.created_at.timestamp_nanos_opt().unwrap_or(0),
        seed.sequence,
        nonce
    )
}

/// First 64 bits of the SHA-256 digest, base36, left-padded then cut to `length`.
fn compute_id_hash(input: &str, length: usize) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);

    let encoded = base36_encode(u64::from_be_bytes(head));
    format!("{encoded:0>length$}").chars().take(length).collect()
}

fn base36_encode(num: u64) -> String {
    let mut digits = Vec::with_capacity(13);
    let mut rest = num;
    loop {
        #[allow(clippy::cast_possible_truncation)]
        let digit = (rest % 36) as u32;
        digits.push(char::from_digit(digit, 36).unwrap_or('0'));
        rest /= 36;
        if rest == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Check that a prefix is usable in IDs: non-empty ASCII alphanumerics.
#[must_use]
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.len() <= 16 && prefix.chars().all(|c| c.is_ascii_alphanumeric())
}
