use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::{Identity, IsIdentity};
use curve25519_dalek::Scalar;
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};

use crate::errors::JpakeError;
use crate::group::Group;

type Result<T> = core::result::Result<T, JpakeError>;

/// Order of the prime subgroup generated by the Ed25519 base point,
/// `2^252 + 27742317777372353535851937790883648493`, big-endian.
const SUBGROUP_ORDER: [u8; 32] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6, 0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5,
    0xd3, 0xed,
];

/// The default group provider, backed by the Edwards form of Curve25519.
///
/// Points are encoded as 32-byte compressed Edwards-Y; scalars as canonical
/// 32-byte little-endian. Decoding rejects non-canonical inputs instead of
/// panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edwards25519;

impl Group for Edwards25519 {
    type Point = EdwardsPoint;
    type Scalar = Scalar;

    fn order() -> [u8; 32] {
        SUBGROUP_ORDER
    }

    fn generator() -> EdwardsPoint {
        ED25519_BASEPOINT_POINT
    }

    fn identity() -> EdwardsPoint {
        EdwardsPoint::identity()
    }

    fn is_identity(p: &EdwardsPoint) -> bool {
        p.is_identity()
    }

    fn add(a: &EdwardsPoint, b: &EdwardsPoint) -> EdwardsPoint {
        a + b
    }

    fn subtract(a: &EdwardsPoint, b: &EdwardsPoint) -> EdwardsPoint {
        a - b
    }

    fn base_mul(s: &Scalar) -> EdwardsPoint {
        EdwardsPoint::mul_base(s)
    }

    fn mul(p: &EdwardsPoint, s: &Scalar) -> EdwardsPoint {
        p * s
    }

    fn point_eq(a: &EdwardsPoint, b: &EdwardsPoint) -> Choice {
        a.ct_eq(b)
    }

    fn point_bytes(p: &EdwardsPoint) -> Vec<u8> {
        p.compress().as_bytes().to_vec()
    }

    fn point_from_bytes(bytes: &[u8]) -> Result<EdwardsPoint> {
        let compressed =
            CompressedEdwardsY::from_slice(bytes).map_err(|_| JpakeError::InvalidPoint)?;
        compressed.decompress().ok_or(JpakeError::InvalidPoint)
    }

    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
        // Wide reduction of 64 uniform bytes, rejecting the (negligible) zero
        // case so the result lies in [1, N-1].
        loop {
            let mut wide = [0u8; 64];
            rng.try_fill_bytes(&mut wide)?;
            let candidate = Scalar::from_bytes_mod_order_wide(&wide);
            if !bool::from(candidate.ct_eq(&Scalar::ZERO)) {
                return Ok(candidate);
            }
        }
    }

    fn scalar_from_secret(bytes: &[u8]) -> Result<Scalar> {
        let s = Self::scalar_from_hash(bytes);
        if bool::from(s.ct_eq(&Scalar::ZERO)) {
            return Err(JpakeError::InvalidScalar);
        }
        Ok(s)
    }

    fn scalar_from_hash(bytes: &[u8]) -> Scalar {
        // Big-endian digest, little-endian wide buffer. Digests longer than
        // 64 bytes keep their low-order 64 bytes.
        let mut wide = [0u8; 64];
        for (dst, src) in wide.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    fn scalar_mul(a: &Scalar, b: &Scalar) -> Scalar {
        a * b
    }

    fn scalar_sub(a: &Scalar, b: &Scalar) -> Scalar {
        a - b
    }

    fn scalar_is_zero(s: &Scalar) -> bool {
        bool::from(s.ct_eq(&Scalar::ZERO))
    }

    fn scalar_bytes(s: &Scalar) -> Vec<u8> {
        s.to_bytes().to_vec()
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| JpakeError::InvalidScalar)?;
        Option::<Scalar>::from(Scalar::from_canonical_bytes(array)).ok_or(JpakeError::InvalidScalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    #[test]
    fn test_random_scalar_is_nonzero() {
        for _ in 0..32 {
            let s = Edwards25519::random_scalar(&mut OsRng).expect("random scalar");
            assert!(!Edwards25519::scalar_is_zero(&s));
        }
    }

    #[test]
    fn test_order_reduces_to_zero() {
        let order = Edwards25519::order();
        assert!(Edwards25519::scalar_is_zero(&Edwards25519::scalar_from_hash(
            &order
        )));
        assert!(Edwards25519::scalar_from_secret(&order).is_err());
    }

    #[test]
    fn test_scalar_from_secret_rejects_empty_reduction() {
        assert!(Edwards25519::scalar_from_secret(&[0u8; 32]).is_err());
        assert!(Edwards25519::scalar_from_secret(b"some secret hash output").is_ok());
    }

    #[test]
    fn test_point_round_trip() {
        let s = Edwards25519::random_scalar(&mut OsRng).expect("random scalar");
        let p = Edwards25519::base_mul(&s);
        let decoded =
            Edwards25519::point_from_bytes(&Edwards25519::point_bytes(&p)).expect("decode point");
        assert_eq!(p, decoded);
    }

    #[test]
    fn test_point_from_bytes_rejects_wrong_length() {
        assert!(Edwards25519::point_from_bytes(&[0u8; 31]).is_err());
        assert!(Edwards25519::point_from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_point_from_bytes_rejects_off_curve() {
        // Roughly half of all y-coordinates have no corresponding x on the
        // curve; at least one of 256 consecutive candidates must fail to
        // decompress.
        let off_curve = (0u8..=255).any(|low| {
            let mut bytes = [0u8; 32];
            bytes[0] = low;
            Edwards25519::point_from_bytes(&bytes).is_err()
        });
        assert!(off_curve);
    }

    #[test]
    fn test_scalar_round_trip() {
        let s = Edwards25519::random_scalar(&mut OsRng).expect("random scalar");
        let decoded =
            Edwards25519::scalar_from_bytes(&Edwards25519::scalar_bytes(&s)).expect("decode");
        assert_eq!(s, decoded);
    }

    #[test]
    fn test_scalar_from_bytes_rejects_noncanonical() {
        // The order itself, little-endian, is the smallest non-canonical value.
        let mut order_le = Edwards25519::order();
        order_le.reverse();
        assert!(Edwards25519::scalar_from_bytes(&order_le).is_err());
    }

    #[test]
    fn test_identity_detection() {
        assert!(Edwards25519::is_identity(&Edwards25519::identity()));
        assert!(!Edwards25519::is_identity(&Edwards25519::generator()));
    }

    #[test]
    fn test_add_subtract_consistency() {
        let a = Edwards25519::base_mul(&Edwards25519::random_scalar(&mut OsRng).unwrap());
        let b = Edwards25519::base_mul(&Edwards25519::random_scalar(&mut OsRng).unwrap());
        let sum = Edwards25519::add(&a, &b);
        assert_eq!(Edwards25519::subtract(&sum, &b), a);
        assert!(Edwards25519::is_identity(&Edwards25519::subtract(&a, &a)));
    }

    #[test]
    fn test_base_mul_matches_generator_mul() {
        let s = Edwards25519::random_scalar(&mut OsRng).expect("random scalar");
        assert_eq!(
            Edwards25519::base_mul(&s),
            Edwards25519::mul(&Edwards25519::generator(), &s)
        );
        assert!(bool::from(Edwards25519::point_eq(
            &Edwards25519::base_mul(&s),
            &Edwards25519::mul(&Edwards25519::generator(), &s)
        )));
    }
}
