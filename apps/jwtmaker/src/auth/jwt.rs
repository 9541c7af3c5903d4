use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::auth::claims::WorkerClaims;
use crate::auth::token_id::TokenIdSource;
use crate::config::params::TokenParams;
use crate::error::AppError;

/// Lifetime of a worker token.
pub const TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

pub const SIGNING_ALGORITHM: Algorithm = Algorithm::RS512;

/// Build the claim set for `params` as of `now`.
pub fn build_claims(
    params: &TokenParams,
    token_ids: &TokenIdSource,
    now: SystemTime,
) -> Result<WorkerClaims, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::Clock)?
        .as_secs() as i64;

    let exp = iat + TOKEN_TTL.as_secs() as i64;

    Ok(WorkerClaims::new(params, token_ids.next_id(), exp))
}

/// Sign `claims` with an RSA private key given as PEM (PKCS#1 or PKCS#8).
pub fn sign_claims(claims: &WorkerClaims, private_key_pem: &[u8]) -> Result<String, AppError> {
    let key = EncodingKey::from_rsa_pem(private_key_pem)
        .map_err(|source| AppError::InvalidKey { source })?;

    // Key material can still be rejected here, once the signer parses it.
    encode(&Header::new(SIGNING_ALGORITHM), claims, &key).map_err(|source| {
        let bad_key = matches!(
            source.kind(),
            ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidKeyFormat
        );
        if bad_key {
            AppError::InvalidKey { source }
        } else {
            AppError::Signing { source }
        }
    })
}

/// Mint an RS512 worker token expiring 15 minutes after `now`.
pub fn mint_worker_token(
    params: &TokenParams,
    private_key_pem: &[u8],
    token_ids: &TokenIdSource,
    now: SystemTime,
) -> Result<String, AppError> {
    let claims = build_claims(params, token_ids, now)?;
    sign_claims(&claims, private_key_pem)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
    use jwtmaker_test_support::fixtures::{
        EC_P256, OTHER_RSA_PUBLIC, WORKER_RSA_PKCS1, WORKER_RSA_PKCS8, WORKER_RSA_PUBLIC,
    };
    use serde_json::{json, Value};

    use super::{build_claims, mint_worker_token, sign_claims, TOKEN_TTL};
    use crate::auth::claims::WorkerClaims;
    use crate::auth::token_id::TokenIdSource;
    use crate::config::params::TokenParams;
    use crate::error::AppError;

    fn params() -> TokenParams {
        TokenParams {
            worker_id: "worker-1".into(),
            worker_type: "server".into(),
            runtime_id: "runtime-a".into(),
            pem_private_key_file: "/unused".into(),
            ..TokenParams::default()
        }
    }

    fn payload(token: &str) -> Value {
        let middle = token.split('.').nth(1).unwrap();
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(middle).unwrap()).unwrap()
    }

    fn verify(token: &str, public_pem: &[u8]) -> jsonwebtoken::errors::Result<WorkerClaims> {
        let key = DecodingKey::from_rsa_pem(public_pem).unwrap();
        decode::<WorkerClaims>(token, &key, &Validation::new(Algorithm::RS512))
            .map(|data| data.claims)
    }

    #[test]
    fn expiry_is_fifteen_minutes_after_now() {
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let claims = build_claims(&params(), &TokenIdSource::legacy(), now).unwrap();
        assert_eq!(claims.exp, 1_700_000_000 + 900);
        assert_eq!(TOKEN_TTL.as_secs(), 900);
    }

    #[test]
    fn clock_before_epoch_is_an_error() {
        let now = UNIX_EPOCH - Duration::from_secs(1);
        let err = build_claims(&params(), &TokenIdSource::Random, now).unwrap_err();
        assert!(matches!(err, AppError::Clock));
    }

    #[test]
    fn token_has_three_segments_and_rs512_header() {
        let token = mint_worker_token(
            &params(),
            WORKER_RSA_PKCS1,
            &TokenIdSource::Random,
            SystemTime::now(),
        )
        .unwrap();

        assert_eq!(token.split('.').count(), 3);
        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS512);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn payload_matches_built_claims() {
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let mut p = params();
        p.player_identity_id = "p1".into();

        let claims = build_claims(&p, &TokenIdSource::legacy(), now).unwrap();
        let token = sign_claims(&claims, WORKER_RSA_PKCS1).unwrap();

        assert_eq!(payload(&token), serde_json::to_value(&claims).unwrap());
        assert_eq!(
            payload(&token),
            json!({
                "exp": 1_700_000_900,
                "player_identity": { "id": "p1" },
                "runtime_id": "runtime-a",
                "token_id": "token_id",
                "worker_id": "worker-1",
                "worker_type": "server",
            })
        );
    }

    #[test]
    fn round_trip_with_public_key() {
        let claims = build_claims(&params(), &TokenIdSource::Random, SystemTime::now()).unwrap();
        let token = sign_claims(&claims, WORKER_RSA_PKCS1).unwrap();

        assert_eq!(verify(&token, WORKER_RSA_PUBLIC).unwrap(), claims);
    }

    #[test]
    fn pkcs8_key_signs_the_same_way() {
        let claims = build_claims(&params(), &TokenIdSource::Random, SystemTime::now()).unwrap();
        let token = sign_claims(&claims, WORKER_RSA_PKCS8).unwrap();

        assert_eq!(verify(&token, WORKER_RSA_PUBLIC).unwrap(), claims);
    }

    #[test]
    fn other_public_key_rejects_signature() {
        let token = mint_worker_token(
            &params(),
            WORKER_RSA_PKCS1,
            &TokenIdSource::Random,
            SystemTime::now(),
        )
        .unwrap();

        let err = verify(&token, OTHER_RSA_PUBLIC).unwrap_err();
        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::InvalidSignature
        ));
    }

    #[test]
    fn random_token_ids_differ_between_tokens() {
        let now = SystemTime::now();
        let a = mint_worker_token(&params(), WORKER_RSA_PKCS1, &TokenIdSource::Random, now).unwrap();
        let b = mint_worker_token(&params(), WORKER_RSA_PKCS1, &TokenIdSource::Random, now).unwrap();

        assert_ne!(payload(&a)["token_id"], payload(&b)["token_id"]);
    }

    #[test]
    fn garbage_key_is_rejected() {
        let err = mint_worker_token(
            &params(),
            b"not a pem file",
            &TokenIdSource::Random,
            SystemTime::now(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidKey { .. }), "got {err:?}");
    }

    #[test]
    fn ec_key_is_rejected() {
        let err = mint_worker_token(&params(), EC_P256, &TokenIdSource::Random, SystemTime::now())
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidKey { .. }), "got {err:?}");
    }

    #[test]
    fn public_key_is_not_a_signing_key() {
        let err = mint_worker_token(
            &params(),
            WORKER_RSA_PUBLIC,
            &TokenIdSource::Random,
            SystemTime::now(),
        )
        .unwrap_err();
        assert!(
            matches!(err, AppError::InvalidKey { .. } | AppError::Signing { .. }),
            "got {err:?}"
        );
    }
}
