//! Integration tests for the signer and verifier entry points

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sigengine_api::{AlgorithmId, CurveId, Error, Verification};
use sigengine_sign::{tag_len, Signer, Verifier};
use sigengine_tests::{keypair, low_key};

#[test]
fn test_sha256_of_abc() {
    let mut out = [0u8; 32];
    let mut signer = Signer::new(b"abc", &mut out);
    signer.sign(AlgorithmId::DigestSha256, &[]).unwrap();
    assert_eq!(signer.output_used(), 32);
    assert_eq!(
        hex::encode(out),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert!(Verifier::new(b"abc", &out)
        .verify(AlgorithmId::DigestSha256, &[])
        .unwrap()
        .is_valid());
}

#[test]
fn test_hmac_round_trip_and_wrong_key() {
    let key = [0xA5u8; 32];
    let mut out = [0u8; 32];
    assert!(matches!(
        Signer::new(b"door opened", &mut out).sign(AlgorithmId::HmacSha256, &key[..31]),
        Err(Error::WrongKeySize { expected: 32, actual: 31, .. })
    ));
    Signer::new(b"door opened", &mut out)
        .sign(AlgorithmId::HmacSha256, &key)
        .unwrap();

    let verifier = Verifier::new(b"door opened", &out);
    assert_eq!(
        verifier.verify(AlgorithmId::HmacSha256, &key).unwrap(),
        Verification::Valid
    );
    let mut other = key;
    other[31] ^= 1;
    assert_eq!(
        verifier.verify(AlgorithmId::HmacSha256, &other).unwrap(),
        Verification::Invalid
    );
}

#[test]
fn test_ecdsa_round_trip_every_curve() {
    for (i, curve) in CurveId::ALL.into_iter().enumerate() {
        let (sk, pk) = keypair(curve, 100 + i as u64).unwrap();
        let alg = AlgorithmId::Ecdsa(curve);
        let len = tag_len(alg).unwrap();
        assert_eq!(len, 64);

        let mut out = [0u8; 64];
        let mut signer = Signer::new(b"status: ok", &mut out);
        let sig = signer.sign(alg, &sk).unwrap().to_vec();
        assert_eq!(sig.len(), len);
        assert_eq!(signer.output_used(), len);

        let verifier = Verifier::new(b"status: ok", &sig);
        assert!(verifier.verify(alg, &pk).unwrap().is_valid(), "{}", curve);
        let tampered = Verifier::new(b"status: ko", &sig);
        assert!(!tampered.verify(alg, &pk).unwrap().is_valid(), "{}", curve);
    }
}

#[test]
fn test_deterministic_signatures_are_stable() {
    let (sk, _) = keypair(CurveId::SECP224R1, 11).unwrap();
    let alg = AlgorithmId::Ecdsa(CurveId::SECP224R1);
    let mut first = [0u8; 64];
    let mut second = [0u8; 64];
    Signer::new(b"boot count 3", &mut first).sign(alg, &sk).unwrap();
    Signer::new(b"boot count 3", &mut second).sign(alg, &sk).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_entropy_signatures_verify() {
    let (sk, pk) = keypair(CurveId::SECP192R1, 7).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let mut source = |buf: &mut [u8]| {
        rng.fill_bytes(buf);
        true
    };
    let mut out = [0u8; 128];
    let mut signer = Signer::with_entropy(b"m", &mut out, &mut source);
    let alg = AlgorithmId::Ecdsa(CurveId::SECP192R1);
    signer.sign(alg, &sk).unwrap();
    signer.sign(alg, &sk).unwrap();
    let written = signer.written().to_vec();

    assert_ne!(written[..64], written[64..]);
    for sig in written.chunks(64) {
        assert!(Verifier::new(b"m", sig).verify(alg, &pk).unwrap().is_valid());
    }
}

#[test]
fn test_oversize_boundary() {
    for alg in [
        AlgorithmId::DigestSha256,
        AlgorithmId::HmacSha256,
        AlgorithmId::Ecdsa(CurveId::SECP160R1),
        AlgorithmId::Ecdsa(CurveId::SECP256K1),
    ] {
        let len = tag_len(alg).unwrap();
        let key = low_key(0x01);

        let mut exact = vec![0u8; len];
        assert!(Signer::new(b"x", &mut exact).sign(alg, &key).is_ok(), "{}", alg);

        let mut short = vec![0u8; len - 1];
        let mut signer = Signer::new(b"x", &mut short);
        assert_eq!(
            signer.sign(alg, &key).unwrap_err(),
            Error::Oversize {
                needed: len,
                available: len - 1
            }
        );
        assert_eq!(signer.output_used(), 0);
    }
}

#[test]
fn test_errors_do_not_move_cursor() {
    let mut out = [0x77u8; 100];
    let mut signer = Signer::new(b"frame", &mut out);
    signer.sign(AlgorithmId::HmacSha256, &[9u8; 32]).unwrap();

    let failures = [
        (AlgorithmId::HmacSha256, vec![9u8; 31]),
        (AlgorithmId::Ecdsa(CurveId::from(7)), vec![1u8; 32]),
        (AlgorithmId::Ecdsa(CurveId::SECP256R1), vec![1u8; 64]),
        (AlgorithmId::Ecdsa(CurveId::SECP256R1), vec![0xFFu8; 32]),
    ];
    for (alg, key) in &failures {
        assert!(signer.sign(*alg, key).is_err());
        assert_eq!(signer.output_used(), 32);
    }
    drop(signer);
    assert!(out[32..].iter().all(|&b| b == 0x77));
}

#[test]
fn test_error_kinds() {
    let mut out = [0u8; 64];
    let mut signer = Signer::new(b"x", &mut out);
    assert!(matches!(
        signer.sign(AlgorithmId::HmacSha256, &[0u8; 33]),
        Err(Error::WrongKeySize { expected: 32, actual: 33, .. })
    ));
    assert!(matches!(
        signer.sign(AlgorithmId::Ecdsa(CurveId::from(5)), &[0u8; 32]),
        Err(Error::UnsupportedAlgorithm { code: 5 })
    ));
    // secp256r1 order n is out of range as a private key
    let n = hex::decode("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551").unwrap();
    let err = signer
        .sign(AlgorithmId::Ecdsa(CurveId::SECP256R1), &n)
        .unwrap_err();
    assert!(matches!(err, Error::CryptoFailure { .. }));
    assert!(err.is_transient());

    // The native secp192r1 width is not accepted; every curve uses 64 bytes
    let verifier = Verifier::new(b"x", &[0u8; 48]);
    assert!(matches!(
        verifier.verify(AlgorithmId::Ecdsa(CurveId::SECP192R1), &[0u8; 48]),
        Err(Error::WrongSignatureSize { expected: 64, actual: 48, .. })
    ));
    // Sizes are checked before the curve code
    assert!(matches!(
        verifier.verify(AlgorithmId::Ecdsa(CurveId::from(9)), &[0u8; 64]),
        Err(Error::WrongSignatureSize { expected: 64, actual: 48, .. })
    ));
}

#[test]
fn test_curve_mismatch_is_not_an_error() {
    // All curves share sizes; the wrong curve is a plain mismatch
    let (sk, pk) = keypair(CurveId::SECP256K1, 3).unwrap();
    let mut out = [0u8; 64];
    Signer::new(b"x", &mut out)
        .sign(AlgorithmId::Ecdsa(CurveId::SECP256K1), &sk)
        .unwrap();
    let verifier = Verifier::new(b"x", &out);
    assert_eq!(
        verifier
            .verify(AlgorithmId::Ecdsa(CurveId::SECP256R1), &pk)
            .unwrap(),
        Verification::Invalid
    );
}

#[test]
fn test_narrow_curves_use_full_width_encodings() {
    for curve in [CurveId::SECP160R1, CurveId::SECP192R1, CurveId::SECP224R1] {
        let alg = AlgorithmId::Ecdsa(curve);
        let key = low_key(0x11);
        let mut out = [0u8; 64];
        let sig = Signer::new(b"abc", &mut out).sign(alg, &key).unwrap().to_vec();
        assert_eq!(sig.len(), 64, "{}", curve);

        // Each half carries its value right-aligned in 32 bytes
        let (_, pk) = keypair(curve, 1).unwrap();
        assert_eq!(pk[..4], [0u8; 4], "{}", curve);
        assert_eq!(pk[32..36], [0u8; 4], "{}", curve);

        // A full-width key is at least n on these curves
        let mut out = [0u8; 64];
        assert!(matches!(
            Signer::new(b"abc", &mut out).sign(alg, &[0x11; 32]),
            Err(Error::CryptoFailure { .. })
        ));
    }
}
