//! Display helpers.

use suara_types::BlockHash;

/// Abbreviate a hash for console output: first 20 hex characters plus an
/// ellipsis.
pub fn short_hash(hash: &BlockHash) -> String {
    let hex = hash.to_hex();
    format!("{}\u{2026}", &hex[..20])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_20_hex_chars() {
        let hash = BlockHash::new([0xAB; 32]);
        let short = short_hash(&hash);
        assert!(short.starts_with("ababababababababab"));
        assert_eq!(short.chars().count(), 21);
        assert!(short.ends_with('\u{2026}'));
    }
}
