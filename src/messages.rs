//! The messages exchanged in the three-pass J-PAKE protocol.
//!
//! The on-wire encoding is left to the caller; every field below must be
//! preserved by whatever codec is used. All fields are public for exactly that
//! reason.

use crate::group::Group;

/// A non-interactive Schnorr proof of knowledge of `x` with `Y = x·generator`.
///
/// The Fiat-Shamir challenge is recomputed from the transcript by the verifier
/// and never transmitted, so a sender cannot pre-commit to it.
#[derive(Clone, Debug)]
pub struct ZkpProof<G: Group> {
    /// The commitment `T = v·generator` for the proof nonce `v`
    pub t: G::Point,
    /// The response `r = v - c·x mod N`
    pub r: G::Scalar,
}

/// The first message in the protocol, created by the initiator
#[derive(Clone, Debug)]
pub struct MessageOne<G: Group> {
    /// The initiator's user identifier
    pub user_id: Vec<u8>,
    /// `G1 = x1·G`
    pub x1_g: G::Point,
    /// `G2 = x2·G`
    pub x2_g: G::Point,
    /// Proof of knowledge of `x1`
    pub x1_zkp: ZkpProof<G>,
    /// Proof of knowledge of `x2`
    pub x2_zkp: ZkpProof<G>,
}

/// The second message in the protocol, created by the responder
#[derive(Clone, Debug)]
pub struct MessageTwo<G: Group> {
    /// The responder's user identifier
    pub user_id: Vec<u8>,
    /// `G3 = x3·G`
    pub x3_g: G::Point,
    /// `G4 = x4·G`
    pub x4_g: G::Point,
    /// `B = x4·s·(G1 + G2 + G3)`
    pub b: G::Point,
    /// Proof of knowledge of `x3`
    pub x3_zkp: ZkpProof<G>,
    /// Proof of knowledge of `x4`
    pub x4_zkp: ZkpProof<G>,
    /// Proof of knowledge of `x4·s` against the composite generator
    pub xs_zkp: ZkpProof<G>,
}

/// The third message in the protocol, created by the initiator
#[derive(Clone, Debug)]
pub struct MessageThree<G: Group> {
    /// `A = x2·s·(G1 + G3 + G4)`
    pub a: G::Point,
    /// Proof of knowledge of `x2·s` against the composite generator
    pub xs_zkp: ZkpProof<G>,
}
