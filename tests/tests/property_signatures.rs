//! Property-based tests for the signer and verifier

use proptest::prelude::*;
use sigengine_api::{AlgorithmId, CurveId, Error};
use sigengine_sign::{tag_len, Signer, Verifier};
use sigengine_tests::{keypair, low_key};

fn curve_id() -> impl Strategy<Value = CurveId> {
    (0u8..5).prop_map(CurveId::from)
}

proptest! {
    #[test]
    fn hmac_round_trip(
        key in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..300),
        flip in any::<prop::sample::Index>()
    ) {
        let mut out = [0u8; 32];
        Signer::new(&message, &mut out).sign_hmac(&key).unwrap();
        prop_assert!(Verifier::new(&message, &out).verify_hmac(&key).unwrap().is_valid());

        let mut tag = out;
        let bit = flip.index(256);
        tag[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!Verifier::new(&message, &tag).verify_hmac(&key).unwrap().is_valid());

        let mut flipped_key = key;
        flipped_key[bit % 32] ^= 0x80;
        prop_assert!(!Verifier::new(&message, &out).verify_hmac(&flipped_key).unwrap().is_valid());

        if !message.is_empty() {
            let mut altered = message.clone();
            let i = flip.index(altered.len());
            altered[i] ^= 0x01;
            prop_assert!(!Verifier::new(&altered, &out).verify_hmac(&key).unwrap().is_valid());
        }
    }

    #[test]
    fn appending_tags_never_overruns(
        capacity in 0usize..160,
        algs in prop::collection::vec(0u8..3, 1..6)
    ) {
        let mut out = vec![0u8; capacity];
        let mut signer = Signer::new(b"telemetry", &mut out);
        for a in algs {
            let (alg, key) = match a {
                0 => (AlgorithmId::DigestSha256, vec![]),
                1 => (AlgorithmId::HmacSha256, vec![3u8; 32]),
                _ => (AlgorithmId::Ecdsa(CurveId::SECP160R1), low_key(3).to_vec()),
            };
            let before = signer.output_used();
            let len = tag_len(alg).unwrap();
            match signer.sign(alg, &key) {
                Ok(tag) => {
                    prop_assert_eq!(tag.len(), len);
                    prop_assert_eq!(signer.output_used(), before + len);
                }
                Err(err) => {
                    prop_assert_eq!(err, Error::Oversize { needed: len, available: capacity - before });
                    prop_assert_eq!(signer.output_used(), before);
                }
            }
            prop_assert!(signer.output_used() <= capacity);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn ecdsa_round_trip(
        curve in curve_id(),
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        let (sk, pk) = keypair(curve, seed).unwrap();

        let alg = AlgorithmId::Ecdsa(curve);
        let mut out = [0u8; 64];
        let len = Signer::new(&message, &mut out).sign(alg, &sk).unwrap().len();
        prop_assert_eq!(len, 64);
        prop_assert!(Verifier::new(&message, &out).verify(alg, &pk).unwrap().is_valid());

        let mut other = message.clone();
        other.push(0);
        prop_assert!(!Verifier::new(&other, &out).verify(alg, &pk).unwrap().is_valid());
    }

    #[test]
    fn unknown_curve_codes_are_rejected(code in 5u8..=255) {
        let alg = AlgorithmId::Ecdsa(CurveId::from(code));
        prop_assert_eq!(tag_len(alg).unwrap_err(), Error::UnsupportedAlgorithm { code });
        let mut out = [0u8; 64];
        prop_assert_eq!(
            Signer::new(b"x", &mut out).sign(alg, &[1u8; 32]).unwrap_err(),
            Error::UnsupportedAlgorithm { code }
        );
    }
}
