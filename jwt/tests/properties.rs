//! Property tests for the codec, tokenizer and HMAC tags

use proptest::prelude::*;
use signet_jwt::{encoding, parse, sign_token, BigNum, Claims, HmacKey, HmacSigner, Signer};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_codec_roundtrips_arbitrary_bytes(data in any::<Vec<u8>>()) {
        let encoded = encoding::encode(&data);
        prop_assert_eq!(encoding::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_codec_output_stays_in_the_url_safe_alphabet(data in any::<Vec<u8>>()) {
        let encoded = encoding::encode(&data);
        prop_assert!(encoded
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn test_tokenizer_accepts_exactly_three_segments(
        segments in prop::collection::vec("[A-Za-z0-9_-]{0,20}", 1..6),
    ) {
        // Splitting is structural only; segment content is not inspected
        // until decode.
        let joined = segments.join(".");
        prop_assert_eq!(parse(joined.as_bytes()).is_ok(), segments.len() == 3);
    }

    #[test]
    fn test_bignum_strips_leading_zeroes_only(data in any::<Vec<u8>>()) {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        let n = BigNum::from_base64(&STANDARD.encode(&data)).unwrap();
        let stripped: Vec<u8> = data.iter().copied().skip_while(|&b| b == 0).collect();
        let expected = if stripped.is_empty() { vec![0] } else { stripped };
        prop_assert_eq!(n.to_bytes_be(), expected);
    }

    #[test]
    fn test_hmac_rejects_any_single_byte_tamper(
        secret in prop::collection::vec(any::<u8>(), 1..64),
        message in prop::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
    ) {
        let signer = HmacSigner::hs256(HmacKey::new(secret));
        let tag = signer.sign(&message).unwrap();
        prop_assert!(signer.verify(&tag, &message).unwrap());

        let mut tampered = message.clone();
        let i = index.index(tampered.len());
        tampered[i] ^= 0x01;
        prop_assert!(!signer.verify(&tag, &tampered).unwrap());
    }

    #[test]
    fn test_pipeline_preserves_arbitrary_subjects(subject in any::<String>()) {
        let signer = HmacSigner::hs256(HmacKey::new("property"));
        let claims = Claims::new().subject(subject);

        let raw = sign_token(&claims, &signer).unwrap();
        let token = parse(raw.as_bytes()).unwrap();
        token.verify(&signer).unwrap();

        let decoded: Claims = token.payload().unwrap();
        prop_assert_eq!(decoded, claims);
    }
}
