//! The protocol implementation

use hmac::digest::core_api::{BlockSizeUser, CoreProxy};
use hmac::digest::typenum::{IsLess, Le, NonZero, U256};
use hmac::digest::Digest;
use hmac::{Hmac, Mac};
use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::errors::JpakeError;
use crate::group::edwards25519::Edwards25519;
use crate::group::Group;
use crate::hash::{Hash, ProxyHash};
use crate::messages::{MessageOne, MessageThree, MessageTwo};
use crate::zkp;

type Result<T> = core::result::Result<T, JpakeError>;

pub(crate) type PointOf<CS> = <<CS as CipherSuite>::Group as Group>::Point;
pub(crate) type ScalarOf<CS> = <<CS as CipherSuite>::Group as Group>::Scalar;

/// Configures the primitives used by a session:
/// * Group: the prime-order group the exchange runs in, and
/// * Hash: the hash behind the proof challenges, the password KDF, and
///   (through HMAC) the session-key and confirmation MACs.
pub trait CipherSuite {
    /// The group to use
    type Group: Group;
    /// The hashing function to use
    type Hash: Hash;
}

/// The default [`CipherSuite`], based on `Edwards25519` and `Sha256`
#[derive(Debug)]
pub struct DefaultCipherSuite;
impl CipherSuite for DefaultCipherSuite {
    type Group = Edwards25519;
    type Hash = sha2::Sha256;
}

/// The default label keying the confirmation-MAC key derivation
pub const DEFAULT_SESSION_CONFIRMATION_BYTES: &[u8] = b"JPAKE_CONFIRM";
/// The default salt label for the password-to-scalar derivation
pub const DEFAULT_SECRET_GENERATION_BYTES: &[u8] = b"SECRET";
/// The default label keying the session-key derivation
pub const DEFAULT_SESSION_GENERATION_BYTES: &[u8] = b"SESSION";

/// SP 800-56A unilateral key-confirmation message header
const KEY_CONFIRMATION_LABEL: &[u8] = b"KC_1_U";

/// The domain-separation labels fed into the key-derivation and confirmation
/// MACs.
///
/// The defaults are fine for interoperability, but callers with low-entropy
/// passwords should supply an application-specific secret-generation salt.
#[derive(Clone, Debug)]
pub struct Config {
    session_confirmation_bytes: Vec<u8>,
    secret_generation_bytes: Vec<u8>,
    session_generation_bytes: Vec<u8>,
}

impl Config {
    /// Creates a [`Config`] with the default labels
    pub fn new() -> Self {
        Self {
            session_confirmation_bytes: DEFAULT_SESSION_CONFIRMATION_BYTES.to_vec(),
            secret_generation_bytes: DEFAULT_SECRET_GENERATION_BYTES.to_vec(),
            session_generation_bytes: DEFAULT_SESSION_GENERATION_BYTES.to_vec(),
        }
    }

    /// Replaces the label keying the confirmation-MAC key derivation
    pub fn with_session_confirmation_bytes(mut self, bytes: &[u8]) -> Self {
        self.session_confirmation_bytes = bytes.to_vec();
        self
    }

    /// Replaces the salt label for the password-to-scalar derivation
    pub fn with_secret_generation_bytes(mut self, bytes: &[u8]) -> Self {
        self.secret_generation_bytes = bytes.to_vec();
        self
    }

    /// Replaces the label keying the session-key derivation
    pub fn with_session_generation_bytes(mut self, bytes: &[u8]) -> Self {
        self.session_generation_bytes = bytes.to_vec();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// The position of a session in the three-pass exchange.
///
/// Odd-numbered working stages belong to the initiator, even-numbered ones to
/// the responder. Each exposed operation is enabled in exactly one stage and
/// advances to the next on success; on error the stage is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Stage {
    /// Initiator created, ready to produce [`MessageOne`]
    InitiatorStart = 1,
    /// Responder created, ready to consume [`MessageOne`]
    ResponderStart = 2,
    /// Initiator waiting for [`MessageTwo`]
    AwaitingMessageTwo = 3,
    /// Responder waiting for [`MessageThree`]
    AwaitingMessageThree = 4,
    /// Initiator waiting for the responder's confirmation tag
    AwaitingConfirmationOne = 5,
    /// Responder waiting for the initiator's confirmation tag
    AwaitingConfirmationTwo = 6,
    /// Initiator finished with a confirmed session key
    InitiatorDone = 7,
    /// Responder finished with a confirmed session key
    ResponderDone = 8,
}

impl Stage {
    /// The stage's wire/persistence representation
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Stage {
    type Error = JpakeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Stage::InitiatorStart),
            2 => Ok(Stage::ResponderStart),
            3 => Ok(Stage::AwaitingMessageTwo),
            4 => Ok(Stage::AwaitingMessageThree),
            5 => Ok(Stage::AwaitingConfirmationOne),
            6 => Ok(Stage::AwaitingConfirmationTwo),
            7 => Ok(Stage::InitiatorDone),
            8 => Ok(Stage::ResponderDone),
            _ => Err(JpakeError::InvalidSessionState),
        }
    }
}

/// The persisted field set of a [`Session`].
///
/// Contains the long-term secret scalars in the clear; callers that store it
/// must protect it at rest. Everything else a session holds is re-derived by
/// [`Session::restore`].
#[derive(Clone, Debug)]
pub struct SessionState<G: Group> {
    /// The stage cursor
    pub stage: Stage,
    /// Own user identifier
    pub user_id: Vec<u8>,
    /// Peer user identifier, once received
    pub other_user_id: Option<Vec<u8>>,
    /// The derived session key; empty until pass three completes
    pub session_key: Vec<u8>,
    /// First private scalar
    pub x1: G::Scalar,
    /// Second private scalar
    pub x2: G::Scalar,
    /// Password-derived scalar
    pub s: G::Scalar,
    /// Peer's first public key, once received
    pub other_x1_g: Option<G::Point>,
    /// Peer's second public key, once received
    pub other_x2_g: Option<G::Point>,
}

/// A per-party session of the three-pass J-PAKE exchange.
///
/// A session is single-owner and not thread-safe; callers serialize use. Every
/// operation either advances the stage and commits its derived state, or fails
/// leaving the session untouched. A failed session should be torn down and the
/// exchange restarted from scratch: one run permits at most one online
/// password guess.
pub struct Session<CS: CipherSuite> {
    user_id: Vec<u8>,
    other_user_id: Option<Vec<u8>>,

    x1: ScalarOf<CS>,
    x2: ScalarOf<CS>,
    s: ScalarOf<CS>,
    x2s: ScalarOf<CS>,

    x1_g: PointOf<CS>,
    x2_g: PointOf<CS>,
    other_x1_g: Option<PointOf<CS>>,
    other_x2_g: Option<PointOf<CS>>,

    stage: Stage,
    session_key: Vec<u8>,
    config: Config,
}

impl<CS: CipherSuite> Session<CS> {
    /// The session's current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Own user identifier
    pub fn user_id(&self) -> &[u8] {
        &self.user_id
    }

    /// The peer's user identifier, once a peer message has been accepted
    pub fn other_user_id(&self) -> Option<&[u8]> {
        self.other_user_id.as_deref()
    }

    /// The derived session key, available once pass three has completed on
    /// this side. Callers should wait for confirmation before using it.
    pub fn session_key(&self) -> Option<&[u8]> {
        if self.session_key.is_empty() {
            None
        } else {
            Some(&self.session_key)
        }
    }

    /// Exports the persisted field set. Restoring it with
    /// [`Session::restore`] yields a session that proceeds identically.
    pub fn state(&self) -> SessionState<CS::Group> {
        SessionState {
            stage: self.stage,
            user_id: self.user_id.clone(),
            other_user_id: self.other_user_id.clone(),
            session_key: self.session_key.clone(),
            x1: self.x1.clone(),
            x2: self.x2.clone(),
            s: self.s.clone(),
            other_x1_g: self.other_x1_g.clone(),
            other_x2_g: self.other_x2_g.clone(),
        }
    }

    /// Reconstructs a session from a persisted field set, re-deriving the own
    /// public keys and the `x2·s` product.
    ///
    /// Zero scalars are rejected, as are peer values missing or equal to the
    /// identity for stages that require them.
    pub fn restore(state: SessionState<CS::Group>, config: Config) -> Result<Self> {
        if state.user_id.is_empty() {
            return Err(JpakeError::InvalidUserId);
        }
        if let Some(other) = &state.other_user_id {
            if bool::from(other.as_slice().ct_eq(&state.user_id)) {
                return Err(JpakeError::InvalidSessionState);
            }
        }
        if CS::Group::scalar_is_zero(&state.x1)
            || CS::Group::scalar_is_zero(&state.x2)
            || CS::Group::scalar_is_zero(&state.s)
        {
            return Err(JpakeError::InvalidScalar);
        }
        if state.stage >= Stage::AwaitingMessageThree {
            if state.other_user_id.is_none() {
                return Err(JpakeError::InvalidSessionState);
            }
            match (&state.other_x1_g, &state.other_x2_g) {
                (Some(p1), Some(p2)) => {
                    if CS::Group::is_identity(p1) || CS::Group::is_identity(p2) {
                        return Err(JpakeError::InvalidPoint);
                    }
                }
                _ => return Err(JpakeError::InvalidSessionState),
            }
            if state.stage >= Stage::AwaitingConfirmationOne && state.session_key.is_empty() {
                return Err(JpakeError::InvalidSessionState);
            }
        }

        let SessionState {
            stage,
            user_id,
            other_user_id,
            session_key,
            x1,
            x2,
            s,
            other_x1_g,
            other_x2_g,
        } = state;
        let x1_g = CS::Group::base_mul(&x1);
        let x2_g = CS::Group::base_mul(&x2);
        let x2s = CS::Group::scalar_mul(&x2, &s);
        Ok(Self {
            user_id,
            other_user_id,
            x1,
            x2,
            s,
            x2s,
            x1_g,
            x2_g,
            other_x1_g,
            other_x2_g,
            stage,
            session_key,
            config,
        })
    }

    fn expect_stage(&self, expected: Stage) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(JpakeError::StageMismatch {
                expected,
                actual: self.stage,
            })
        }
    }
}

impl<CS: CipherSuite> Session<CS>
where
    <CS::Hash as CoreProxy>::Core: ProxyHash,
    <<CS::Hash as CoreProxy>::Core as BlockSizeUser>::BlockSize: IsLess<U256>,
    Le<<<CS::Hash as CoreProxy>::Core as BlockSizeUser>::BlockSize, U256>: NonZero,
{
    /// Creates the initiating party of an exchange
    pub fn initiator<R: RngCore + CryptoRng>(
        user_id: &[u8],
        password: &[u8],
        config: Config,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(Stage::InitiatorStart, user_id, password, config, rng)
    }

    /// Creates the responding party of an exchange
    pub fn responder<R: RngCore + CryptoRng>(
        user_id: &[u8],
        password: &[u8],
        config: Config,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(Stage::ResponderStart, user_id, password, config, rng)
    }

    fn new<R: RngCore + CryptoRng>(
        stage: Stage,
        user_id: &[u8],
        password: &[u8],
        config: Config,
        rng: &mut R,
    ) -> Result<Self> {
        if user_id.is_empty() {
            return Err(JpakeError::InvalidUserId);
        }
        let x1 = CS::Group::random_scalar(rng)?;
        let x2 = CS::Group::random_scalar(rng)?;
        let s = Self::derive_secret_scalar(password, &config)?;
        let x2s = CS::Group::scalar_mul(&x2, &s);
        let x1_g = CS::Group::base_mul(&x1);
        let x2_g = CS::Group::base_mul(&x2);
        Ok(Self {
            user_id: user_id.to_vec(),
            other_user_id: None,
            x1,
            x2,
            s,
            x2s,
            x1_g,
            x2_g,
            other_x1_g: None,
            other_x2_g: None,
            stage,
            session_key: Vec::new(),
            config,
        })
    }

    /// The first pass: the initiator emits its two public keys with proofs of
    /// knowledge of their discrete logs.
    pub fn pass1<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<MessageOne<CS::Group>> {
        self.expect_stage(Stage::InitiatorStart)?;
        let base = CS::Group::generator();
        let x1_zkp = zkp::prove::<CS, _>(rng, &self.x1, &base, &self.x1_g, &self.user_id)?;
        let x2_zkp = zkp::prove::<CS, _>(rng, &self.x2, &base, &self.x2_g, &self.user_id)?;
        self.stage = Stage::AwaitingMessageTwo;
        Ok(MessageOne {
            user_id: self.user_id.clone(),
            x1_g: self.x1_g.clone(),
            x2_g: self.x2_g.clone(),
            x1_zkp,
            x2_zkp,
        })
    }

    /// The second pass: the responder validates [`MessageOne`] and emits its
    /// own public keys, the masked point `B`, and the accompanying proofs.
    pub fn pass2<R: RngCore + CryptoRng>(
        &mut self,
        msg: &MessageOne<CS::Group>,
        rng: &mut R,
    ) -> Result<MessageTwo<CS::Group>> {
        self.expect_stage(Stage::ResponderStart)?;
        if bool::from(msg.user_id.as_slice().ct_eq(&self.user_id)) {
            return Err(JpakeError::InvalidMessage);
        }
        let base = CS::Group::generator();
        let x1_ok = zkp::verify::<CS>(&msg.x1_zkp, &base, &msg.x1_g, &msg.user_id);
        let x2_ok = zkp::verify::<CS>(&msg.x2_zkp, &base, &msg.x2_g, &msg.user_id);
        if !(x1_ok && x2_ok) {
            return Err(JpakeError::InvalidMessage);
        }

        // B is proven against G1 + G3 + G4, which from this side is the peer's
        // two keys plus our first key.
        let b_generator = CS::Group::add(&CS::Group::add(&self.x1_g, &msg.x1_g), &msg.x2_g);
        if CS::Group::is_identity(&b_generator) {
            return Err(JpakeError::InvalidMessage);
        }
        let b = CS::Group::mul(&b_generator, &self.x2s);

        // Fresh proofs for our own keys, with fresh nonces.
        let x3_zkp = zkp::prove::<CS, _>(rng, &self.x1, &base, &self.x1_g, &self.user_id)?;
        let x4_zkp = zkp::prove::<CS, _>(rng, &self.x2, &base, &self.x2_g, &self.user_id)?;
        let xs_zkp = zkp::prove::<CS, _>(rng, &self.x2s, &b_generator, &b, &self.user_id)?;

        self.other_user_id = Some(msg.user_id.clone());
        self.other_x1_g = Some(msg.x1_g.clone());
        self.other_x2_g = Some(msg.x2_g.clone());
        self.stage = Stage::AwaitingMessageThree;
        Ok(MessageTwo {
            user_id: self.user_id.clone(),
            x3_g: self.x1_g.clone(),
            x4_g: self.x2_g.clone(),
            b,
            x3_zkp,
            x4_zkp,
            xs_zkp,
        })
    }

    /// The third pass: the initiator validates [`MessageTwo`], emits the
    /// masked point `A` with its proof, and derives the session key.
    pub fn pass3<R: RngCore + CryptoRng>(
        &mut self,
        msg: &MessageTwo<CS::Group>,
        rng: &mut R,
    ) -> Result<MessageThree<CS::Group>> {
        self.expect_stage(Stage::AwaitingMessageTwo)?;
        if bool::from(msg.user_id.as_slice().ct_eq(&self.user_id)) {
            return Err(JpakeError::InvalidMessage);
        }
        let base = CS::Group::generator();
        // The peer proved B against G1 + G2 + G3.
        let b_generator = CS::Group::add(&CS::Group::add(&self.x1_g, &self.x2_g), &msg.x3_g);
        let x3_ok = zkp::verify::<CS>(&msg.x3_zkp, &base, &msg.x3_g, &msg.user_id);
        let x4_ok = zkp::verify::<CS>(&msg.x4_zkp, &base, &msg.x4_g, &msg.user_id);
        let xs_ok = zkp::verify::<CS>(&msg.xs_zkp, &b_generator, &msg.b, &msg.user_id);
        if !(x3_ok && x4_ok && xs_ok) {
            return Err(JpakeError::InvalidMessage);
        }

        // A is proven against G1 + G3 + G4.
        let a_generator = CS::Group::add(&CS::Group::add(&self.x1_g, &msg.x3_g), &msg.x4_g);
        if CS::Group::is_identity(&a_generator) {
            return Err(JpakeError::InvalidMessage);
        }
        let a = CS::Group::mul(&a_generator, &self.x2s);
        let xs_zkp = zkp::prove::<CS, _>(rng, &self.x2s, &a_generator, &a, &self.user_id)?;

        let session_key = self.shared_key(&msg.b, &msg.x4_g)?;
        self.other_user_id = Some(msg.user_id.clone());
        self.other_x1_g = Some(msg.x3_g.clone());
        self.other_x2_g = Some(msg.x4_g.clone());
        self.session_key = session_key;
        self.stage = Stage::AwaitingConfirmationOne;
        Ok(MessageThree { a, xs_zkp })
    }

    /// The responder's last protocol step: validates [`MessageThree`], derives
    /// the session key, and returns the first confirmation tag for the
    /// initiator.
    pub fn process_pass3(&mut self, msg: &MessageThree<CS::Group>) -> Result<Vec<u8>> {
        self.expect_stage(Stage::AwaitingMessageThree)?;
        let other_user_id = self
            .other_user_id
            .clone()
            .ok_or(JpakeError::InvalidSessionState)?;
        let other_x1_g = self
            .other_x1_g
            .clone()
            .ok_or(JpakeError::InvalidSessionState)?;
        let other_x2_g = self
            .other_x2_g
            .clone()
            .ok_or(JpakeError::InvalidSessionState)?;

        // The peer proved A against G1 + G3 + G4, which from this side is our
        // two keys plus the peer's first key.
        let a_generator = CS::Group::add(&CS::Group::add(&self.x1_g, &self.x2_g), &other_x1_g);
        if !zkp::verify::<CS>(&msg.xs_zkp, &a_generator, &msg.a, &other_user_id) {
            return Err(JpakeError::InvalidMessage);
        }

        let session_key = self.shared_key(&msg.a, &other_x2_g)?;
        let confirm1 = self.confirmation_tag(&session_key, true)?;
        self.session_key = session_key;
        self.stage = Stage::AwaitingConfirmationTwo;
        Ok(confirm1)
    }

    /// The initiator's confirmation step: checks the responder's tag and, if
    /// it matches, returns the answering tag.
    pub fn process_confirm1(&mut self, confirm1: &[u8]) -> Result<Vec<u8>> {
        self.expect_stage(Stage::AwaitingConfirmationOne)?;
        let expected = self.confirmation_tag(&self.session_key, false)?;
        if !bool::from(expected.as_slice().ct_eq(confirm1)) {
            return Err(JpakeError::ConfirmationMismatch);
        }
        let confirm2 = self.confirmation_tag(&self.session_key, true)?;
        self.stage = Stage::InitiatorDone;
        Ok(confirm2)
    }

    /// The responder's confirmation step: checks the initiator's tag
    pub fn process_confirm2(&mut self, confirm2: &[u8]) -> Result<()> {
        self.expect_stage(Stage::AwaitingConfirmationTwo)?;
        let expected = self.confirmation_tag(&self.session_key, false)?;
        if !bool::from(expected.as_slice().ct_eq(confirm2)) {
            return Err(JpakeError::ConfirmationMismatch);
        }
        self.stage = Stage::ResponderDone;
        Ok(())
    }

    /// Derives the session key from the peer's masked point:
    /// `MAC(x2·(P - x2s·peer_x2_g))` keyed with the session-generation label.
    /// Both parties arrive at the same inner point.
    fn shared_key(&self, p: &PointOf<CS>, peer_x2_g: &PointOf<CS>) -> Result<Vec<u8>> {
        let masked = CS::Group::subtract(p, &CS::Group::mul(peer_x2_g, &self.x2s));
        let k = CS::Group::mul(&masked, &self.x2);
        let mut mac = Hmac::<CS::Hash>::new_from_slice(&self.config.session_generation_bytes)?;
        mac.update(&CS::Group::point_bytes(&k));
        Ok(mac.finalize().into_bytes().as_slice().to_vec())
    }

    /// Computes a key-confirmation tag over both identities and all four
    /// public keys, each field length-prefixed. `own_perspective` selects the
    /// ordering: tags we emit lead with our identity, tags we expect lead with
    /// the peer's.
    fn confirmation_tag(&self, session_key: &[u8], own_perspective: bool) -> Result<Vec<u8>> {
        let other_user_id = self
            .other_user_id
            .as_deref()
            .ok_or(JpakeError::InvalidSessionState)?;
        let other_x1_g = self
            .other_x1_g
            .as_ref()
            .ok_or(JpakeError::InvalidSessionState)?;
        let other_x2_g = self
            .other_x2_g
            .as_ref()
            .ok_or(JpakeError::InvalidSessionState)?;

        let mut key_mac =
            Hmac::<CS::Hash>::new_from_slice(&self.config.session_confirmation_bytes)?;
        key_mac.update(session_key);
        let confirmation_key = Zeroizing::new(key_mac.finalize().into_bytes().as_slice().to_vec());

        let own_x1_g = CS::Group::point_bytes(&self.x1_g);
        let own_x2_g = CS::Group::point_bytes(&self.x2_g);
        let peer_x1_g = CS::Group::point_bytes(other_x1_g);
        let peer_x2_g = CS::Group::point_bytes(other_x2_g);

        let fields: [&[u8]; 7] = if own_perspective {
            [
                KEY_CONFIRMATION_LABEL,
                &self.user_id,
                other_user_id,
                &own_x1_g,
                &own_x2_g,
                &peer_x1_g,
                &peer_x2_g,
            ]
        } else {
            [
                KEY_CONFIRMATION_LABEL,
                other_user_id,
                &self.user_id,
                &peer_x1_g,
                &peer_x2_g,
                &own_x1_g,
                &own_x2_g,
            ]
        };

        let mut mac = Hmac::<CS::Hash>::new_from_slice(&confirmation_key)?;
        for field in fields {
            mac.update(&(field.len() as u64).to_be_bytes());
            mac.update(field);
        }
        Ok(mac.finalize().into_bytes().as_slice().to_vec())
    }

    /// Derives the password scalar `s` from
    /// `HASH(MAC(password))` keyed with the secret-generation label,
    /// reduced into `[1, N-1]`.
    fn derive_secret_scalar(password: &[u8], config: &Config) -> Result<ScalarOf<CS>> {
        let mut mac = Hmac::<CS::Hash>::new_from_slice(&config.secret_generation_bytes)?;
        mac.update(password);
        let stretched = Zeroizing::new(mac.finalize().into_bytes().as_slice().to_vec());
        let digest = CS::Hash::digest(stretched.as_slice());
        CS::Group::scalar_from_secret(digest.as_slice())
    }
}

impl<CS: CipherSuite> Drop for Session<CS> {
    fn drop(&mut self) {
        self.x1.zeroize();
        self.x2.zeroize();
        self.s.zeroize();
        self.x2s.zeroize();
        self.session_key.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_round_trip() {
        for value in 1u8..=8 {
            let stage = Stage::try_from(value).expect("valid stage");
            assert_eq!(stage.as_u8(), value);
        }
        assert!(Stage::try_from(0).is_err());
        assert!(Stage::try_from(9).is_err());
    }

    #[test]
    fn test_stage_ordering_follows_protocol() {
        assert!(Stage::InitiatorStart < Stage::AwaitingMessageTwo);
        assert!(Stage::AwaitingMessageThree < Stage::AwaitingConfirmationOne);
        assert!(Stage::AwaitingConfirmationTwo < Stage::ResponderDone);
    }

    #[test]
    fn test_config_labels() {
        let config = Config::new()
            .with_session_confirmation_bytes(b"A")
            .with_secret_generation_bytes(b"B")
            .with_session_generation_bytes(b"C");
        assert_eq!(config.session_confirmation_bytes, b"A");
        assert_eq!(config.secret_generation_bytes, b"B");
        assert_eq!(config.session_generation_bytes, b"C");
    }
}
