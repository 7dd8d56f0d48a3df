use proptest::prelude::*;

use suara_types::{BlockHash, Timestamp, VoterId};

proptest! {
    /// BlockHash roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn block_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// BlockHash::is_zero is true only for all-zero bytes.
    #[test]
    fn block_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Display always renders exactly 64 lowercase hex characters.
    #[test]
    fn block_hash_display_canonical(bytes in prop::array::uniform32(0u8..)) {
        let rendered = BlockHash::new(bytes).to_string();
        prop_assert_eq!(rendered.len(), 64);
        prop_assert!(rendered.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Distinct byte arrays render to distinct hex strings.
    #[test]
    fn block_hash_display_injective(
        a in prop::array::uniform32(0u8..),
        b in prop::array::uniform32(0u8..),
    ) {
        let ha = BlockHash::new(a);
        let hb = BlockHash::new(b);
        prop_assert_eq!(ha.to_string() == hb.to_string(), a == b);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Timestamp max agrees with the underlying integer max.
    #[test]
    fn timestamp_max(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let later = Timestamp::new(a).max(Timestamp::new(b));
        prop_assert_eq!(later.as_millis(), a.max(b));
    }

    /// VoterId equality is exact string equality.
    #[test]
    fn voter_id_equality(a in ".{0,40}", b in ".{0,40}") {
        let va = VoterId::new(a.clone());
        let vb = VoterId::new(b.clone());
        prop_assert_eq!(va == vb, a == b);
    }

    /// VoterId roundtrips its raw string.
    #[test]
    fn voter_id_roundtrip(s in ".{0,40}") {
        let v = VoterId::new(s.clone());
        prop_assert_eq!(v.as_str(), s.as_str());
    }
}
