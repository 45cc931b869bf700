use proptest::prelude::*;

use mint_auditor_types::{MobUsdAmount, RsvAmount, RsvHash, TxoId};

proptest! {
    /// MobUsdAmount: value roundtrip.
    #[test]
    fn mob_usd_amount_value_roundtrip(value in -1e15f64..1e15) {
        prop_assert_eq!(MobUsdAmount::new(value).value(), value);
    }

    /// Any finite number survives a JSON encode/decode unchanged.
    #[test]
    fn rsv_amount_json_exact(value in -1e15f64..1e15) {
        let json = serde_json::to_string(&RsvAmount::new(value)).unwrap();
        let decoded: RsvAmount = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded.value(), value);
    }

    /// checked_add matches plain addition inside the finite range.
    #[test]
    fn mob_usd_amount_checked_add(a in -1e15f64..1e15, b in -1e15f64..1e15) {
        let sum = MobUsdAmount::new(a).checked_add(MobUsdAmount::new(b));
        prop_assert_eq!(sum, Some(MobUsdAmount::new(a + b)));
    }

    /// Amount ordering follows the underlying value.
    #[test]
    fn amount_ordering(a in -1e15f64..1e15, b in -1e15f64..1e15) {
        prop_assert_eq!(MobUsdAmount::new(a) <= MobUsdAmount::new(b), a <= b);
        prop_assert_eq!(RsvAmount::new(a) == RsvAmount::new(b), a == b);
    }

    /// Any string is accepted as an identifier and read back unchanged.
    #[test]
    fn identifiers_accept_any_string(s in ".*") {
        let json = serde_json::to_string(&s).unwrap();
        let txo: TxoId = serde_json::from_str(&json).unwrap();
        let hash: RsvHash = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(txo.as_str(), s.as_str());
        prop_assert_eq!(hash.as_str(), s.as_str());
    }
}
