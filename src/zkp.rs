//! Schnorr-style non-interactive zero-knowledge proofs via the Fiat-Shamir
//! heuristic.
//!
//! Each proof attests knowledge of `x` such that `Y = x·generator`, where the
//! generator is an arbitrary group element: the base point for the first-round
//! proofs, a composite sum of public keys for the `A`/`B` proofs. The sender's
//! user identifier is folded into the challenge, which binds the proof to the
//! party and blocks replaying it under another identity.

use hmac::digest::Digest;
use rand_core::{CryptoRng, RngCore};

use crate::group::Group;
use crate::messages::ZkpProof;
use crate::protocol::{CipherSuite, PointOf, ScalarOf};
use crate::JpakeError;

type Result<T> = core::result::Result<T, JpakeError>;

/// Computes the Fiat-Shamir challenge `H(generator ‖ T ‖ Y ‖ id) mod N`.
///
/// Every field is prefixed with its big-endian `u64` length so that the
/// concatenation is unambiguous regardless of field sizes.
fn challenge<CS: CipherSuite>(
    generator: &[u8],
    t: &[u8],
    y: &[u8],
    sender_id: &[u8],
) -> ScalarOf<CS> {
    let mut hasher = CS::Hash::new();
    for field in [generator, t, y, sender_id] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field);
    }
    CS::Group::scalar_from_hash(hasher.finalize().as_slice())
}

/// Proves knowledge of `x` such that `y = x·generator`, bound to `sender_id`.
pub(crate) fn prove<CS: CipherSuite, R: RngCore + CryptoRng>(
    rng: &mut R,
    x: &ScalarOf<CS>,
    generator: &PointOf<CS>,
    y: &PointOf<CS>,
    sender_id: &[u8],
) -> Result<ZkpProof<CS::Group>> {
    let v = CS::Group::random_scalar(rng)?;
    let t = CS::Group::mul(generator, &v);
    let c = challenge::<CS>(
        &CS::Group::point_bytes(generator),
        &CS::Group::point_bytes(&t),
        &CS::Group::point_bytes(y),
        sender_id,
    );
    let r = CS::Group::scalar_sub(&v, &CS::Group::scalar_mul(&c, x));
    Ok(ZkpProof { t, r })
}

/// Verifies a proof of knowledge of the discrete log of `y` with respect to
/// `generator`, recomputing the challenge under `sender_id`.
///
/// Identity inputs and zero scalars are rejected outright: a proof with
/// `T = O` or `r = 0` would otherwise verify for many `(Y, c)` pairs.
pub(crate) fn verify<CS: CipherSuite>(
    proof: &ZkpProof<CS::Group>,
    generator: &PointOf<CS>,
    y: &PointOf<CS>,
    sender_id: &[u8],
) -> bool {
    if CS::Group::is_identity(generator)
        || CS::Group::is_identity(y)
        || CS::Group::is_identity(&proof.t)
    {
        return false;
    }
    if CS::Group::scalar_is_zero(&proof.r) {
        return false;
    }
    let c = challenge::<CS>(
        &CS::Group::point_bytes(generator),
        &CS::Group::point_bytes(&proof.t),
        &CS::Group::point_bytes(y),
        sender_id,
    );
    if CS::Group::scalar_is_zero(&c) {
        return false;
    }
    let v = CS::Group::add(
        &CS::Group::mul(generator, &proof.r),
        &CS::Group::mul(y, &c),
    );
    bool::from(CS::Group::point_eq(&v, &proof.t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::edwards25519::Edwards25519;
    use crate::protocol::DefaultCipherSuite;
    use curve25519_dalek::Scalar;
    use rand_core::OsRng;

    type G = Edwards25519;

    struct Fixture {
        x: Scalar,
        generator: curve25519_dalek::edwards::EdwardsPoint,
        y: curve25519_dalek::edwards::EdwardsPoint,
        proof: ZkpProof<G>,
    }

    fn fixture(sender_id: &[u8]) -> Fixture {
        let x = G::random_scalar(&mut OsRng).expect("random scalar");
        let generator = G::generator();
        let y = G::mul(&generator, &x);
        let proof =
            prove::<DefaultCipherSuite, _>(&mut OsRng, &x, &generator, &y, sender_id).expect("prove");
        Fixture {
            x,
            generator,
            y,
            proof,
        }
    }

    #[test]
    fn test_prove_verify_round_trip() {
        let f = fixture(b"alice");
        assert!(verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &f.y,
            b"alice"
        ));
    }

    #[test]
    fn test_round_trip_with_composite_generator() {
        let x = G::random_scalar(&mut OsRng).unwrap();
        let other = G::base_mul(&G::random_scalar(&mut OsRng).unwrap());
        let generator = G::add(&G::generator(), &other);
        let y = G::mul(&generator, &x);
        let proof =
            prove::<DefaultCipherSuite, _>(&mut OsRng, &x, &generator, &y, b"alice").unwrap();
        assert!(verify::<DefaultCipherSuite>(&proof, &generator, &y, b"alice"));
    }

    #[test]
    fn test_rejects_mutated_commitment() {
        let mut f = fixture(b"alice");
        f.proof.t = G::add(&f.proof.t, &f.generator);
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &f.y,
            b"alice"
        ));
    }

    #[test]
    fn test_rejects_mutated_response() {
        let mut f = fixture(b"alice");
        f.proof.r += Scalar::ONE;
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &f.y,
            b"alice"
        ));
    }

    #[test]
    fn test_rejects_wrong_public_key() {
        let f = fixture(b"alice");
        let wrong_y = G::add(&f.y, &f.generator);
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &wrong_y,
            b"alice"
        ));
    }

    #[test]
    fn test_rejects_wrong_generator() {
        let f = fixture(b"alice");
        let wrong_generator = G::add(&f.generator, &f.y);
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &wrong_generator,
            &f.y,
            b"alice"
        ));
    }

    #[test]
    fn test_rejects_wrong_sender_id() {
        let f = fixture(b"alice");
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &f.y,
            b"mallory"
        ));
    }

    #[test]
    fn test_rejects_identity_commitment() {
        let mut f = fixture(b"alice");
        f.proof.t = G::identity();
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &f.y,
            b"alice"
        ));
    }

    #[test]
    fn test_rejects_zero_response() {
        let mut f = fixture(b"alice");
        f.proof.r = Scalar::ZERO;
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &f.y,
            b"alice"
        ));
    }

    #[test]
    fn test_rejects_identity_generator() {
        let f = fixture(b"alice");
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &G::identity(),
            &f.y,
            b"alice"
        ));
    }

    #[test]
    fn test_rejects_identity_public_key() {
        let f = fixture(b"alice");
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &G::identity(),
            b"alice"
        ));
    }

    #[test]
    fn test_proof_is_not_transferable_between_keys() {
        // A proof for x must not verify for a different key with the same
        // public point relation under another exponent.
        let f = fixture(b"alice");
        let x2 = G::scalar_mul(&f.x, &Scalar::from(2u64));
        let y2 = G::mul(&f.generator, &x2);
        assert!(!verify::<DefaultCipherSuite>(
            &f.proof,
            &f.generator,
            &y2,
            b"alice"
        ));
    }
}
