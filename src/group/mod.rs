//! The abstract prime-order group the protocol is generic over

pub mod edwards25519;

use core::fmt::Debug;

use crate::errors::JpakeError;
use rand_core::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::Zeroize;

type Result<T> = core::result::Result<T, JpakeError>;

/// Operations over a prime-order subgroup of an elliptic curve.
///
/// The protocol only relies on the capability set below: group addition and
/// subtraction, scalar multiplication, scalar arithmetic modulo the subgroup
/// order `N`, identity and zero predicates, and canonical encodings. Providers
/// must not expose panics from their underlying arithmetic library; malformed
/// encodings surface as errors.
pub trait Group {
    /// A group element
    type Point: Clone + Debug + PartialEq;
    /// A scalar modulo the prime subgroup order
    type Scalar: Clone + Debug + PartialEq + Zeroize;

    /// The subgroup order `N` as big-endian bytes
    fn order() -> [u8; 32];

    /// The canonical base point of the subgroup
    fn generator() -> Self::Point;

    /// The neutral element
    fn identity() -> Self::Point;

    /// Whether `p` is the neutral element
    fn is_identity(p: &Self::Point) -> bool;

    /// `a + b`
    fn add(a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// `a - b`
    fn subtract(a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// `s·G` for the canonical base point `G`
    fn base_mul(s: &Self::Scalar) -> Self::Point;

    /// `s·p`
    fn mul(p: &Self::Point, s: &Self::Scalar) -> Self::Point;

    /// Constant-time point equality
    fn point_eq(a: &Self::Point, b: &Self::Point) -> Choice;

    /// The canonical encoding of `p`
    fn point_bytes(p: &Self::Point) -> Vec<u8>;

    /// Decodes a point from its canonical encoding
    fn point_from_bytes(bytes: &[u8]) -> Result<Self::Point>;

    /// Samples a uniform scalar in `[1, N-1]`. RNG failures are surfaced
    /// without any partial state.
    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Scalar>;

    /// Derives a scalar in `[1, N-1]` from key-derivation output, rejecting
    /// inputs that reduce to zero
    fn scalar_from_secret(bytes: &[u8]) -> Result<Self::Scalar>;

    /// Reduces a digest, interpreted as a big-endian integer, modulo `N`.
    /// The result may be zero; callers that forbid zero must check.
    fn scalar_from_hash(bytes: &[u8]) -> Self::Scalar;

    /// `a·b mod N`
    fn scalar_mul(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// `a - b mod N`
    fn scalar_sub(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Whether `s` is the zero scalar (constant-time internally)
    fn scalar_is_zero(s: &Self::Scalar) -> bool;

    /// The canonical encoding of `s`
    fn scalar_bytes(s: &Self::Scalar) -> Vec<u8>;

    /// Decodes a scalar from its canonical encoding, rejecting non-canonical
    /// representations
    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar>;
}
