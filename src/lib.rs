//! An implementation of the three-pass elliptic-curve variant of J-PAKE
//! ([RFC 8236, section 4](https://tools.ietf.org/html/rfc8236#section-4)),
//! a password-authenticated key exchange (PAKE), with key confirmation in the
//! style of NIST SP 800-56A.
//!
//! ⚠️ **Warning**: This implementation has not been audited. Use at your own risk!
//!
//! # Overview
//!
//! J-PAKE is a protocol between two parties: an initiator and a responder.
//! Each party holds a user identifier and a low-entropy password. After three
//! messages and a two-message confirmation round trip, both parties hold the
//! same high-entropy session key if and only if their passwords matched. An
//! adversary who does not know the password learns nothing useful about it
//! from observing or interfering with a run, and a single run permits at most
//! one online password guess.
//!
//! Each party drives a [`Session`], a state machine that produces and consumes
//! the protocol messages in a fixed order. Invoking an operation out of order
//! fails with [`JpakeError::StageMismatch`] and leaves the session unchanged.
//!
//! # Setup
//!
//! The two parties must first agree on a collection of primitives, kept
//! consistent throughout protocol execution:
//! * a prime-order group, and
//! * a hashing function (used for proof challenges, the password KDF, and the
//!   HMAC-based key derivation and confirmation).
//!
//! ```ignore
//! use jpake::CipherSuite;
//! struct Default;
//! impl CipherSuite for Default {
//!     type Group = jpake::Edwards25519;
//!     type Hash = sha2::Sha256;
//! }
//! ```
//!
//! [`DefaultCipherSuite`] provides exactly these choices. The
//! domain-separation labels fed into the key-derivation MACs are configured at
//! runtime through [`Config`]; callers with low-entropy passwords should set
//! an application-specific secret-generation salt.
//!
//! # Protocol Execution
//!
//! The exchange occurs over six steps, involving three protocol messages and
//! two confirmation tags. The on-wire encoding of messages is left to the
//! caller.
//!
//! ## Initiator Start
//!
//! The initiator begins the protocol with its identifier, the password, and a
//! source of randomness, and sends [`MessageOne`] to the responder:
//!
//! ```
//! use jpake::{Config, DefaultCipherSuite, Session};
//! use jpake::rand_core::OsRng;
//!
//! let mut initiator_rng = OsRng;
//! let mut initiator = Session::<DefaultCipherSuite>::initiator(
//!     b"initiator",
//!     b"password",
//!     Config::new(),
//!     &mut initiator_rng,
//! )
//! .expect("Error with Session::initiator()");
//! let message_one = initiator.pass1(&mut initiator_rng).expect("Error with pass1()");
//! // Send message_one over the wire to the responder
//! ```
//!
//! ## Responder Pass
//!
//! The responder validates [`MessageOne`] and answers with [`MessageTwo`]:
//!
//! ```
//! # use jpake::{Config, DefaultCipherSuite, Session};
//! # use jpake::rand_core::OsRng;
//! # let mut initiator_rng = OsRng;
//! # let mut initiator = Session::<DefaultCipherSuite>::initiator(
//! #     b"initiator",
//! #     b"password",
//! #     Config::new(),
//! #     &mut initiator_rng,
//! # )
//! # .expect("Error with Session::initiator()");
//! # let message_one = initiator.pass1(&mut initiator_rng).expect("Error with pass1()");
//! let mut responder_rng = OsRng;
//! let mut responder = Session::<DefaultCipherSuite>::responder(
//!     b"responder",
//!     b"password",
//!     Config::new(),
//!     &mut responder_rng,
//! )
//! .expect("Error with Session::responder()");
//! let message_two = responder
//!     .pass2(&message_one, &mut responder_rng)
//!     .expect("Error with pass2()");
//! // Send message_two over the wire to the initiator
//! ```
//!
//! ## Initiator Finish and Confirmation
//!
//! The initiator validates [`MessageTwo`], derives its session key, and sends
//! [`MessageThree`]. The responder validates it, derives the same key, and
//! answers with a confirmation tag; one more round trip proves to both sides
//! that the keys match:
//!
//! ```
//! # use jpake::{Config, DefaultCipherSuite, Session};
//! # use jpake::rand_core::OsRng;
//! # let mut initiator_rng = OsRng;
//! # let mut initiator = Session::<DefaultCipherSuite>::initiator(
//! #     b"initiator",
//! #     b"password",
//! #     Config::new(),
//! #     &mut initiator_rng,
//! # )
//! # .expect("Error with Session::initiator()");
//! # let message_one = initiator.pass1(&mut initiator_rng).expect("Error with pass1()");
//! # let mut responder_rng = OsRng;
//! # let mut responder = Session::<DefaultCipherSuite>::responder(
//! #     b"responder",
//! #     b"password",
//! #     Config::new(),
//! #     &mut responder_rng,
//! # )
//! # .expect("Error with Session::responder()");
//! # let message_two = responder
//! #     .pass2(&message_one, &mut responder_rng)
//! #     .expect("Error with pass2()");
//! let message_three = initiator
//!     .pass3(&message_two, &mut initiator_rng)
//!     .expect("Error with pass3()");
//! // Send message_three over the wire to the responder
//!
//! let confirm_one = responder
//!     .process_pass3(&message_three)
//!     .expect("Error with process_pass3()");
//! // Send confirm_one over the wire to the initiator
//!
//! let confirm_two = initiator
//!     .process_confirm1(&confirm_one)
//!     .expect("Error with process_confirm1()");
//! // Send confirm_two over the wire to the responder
//!
//! responder
//!     .process_confirm2(&confirm_two)
//!     .expect("Error with process_confirm2()");
//!
//! assert_eq!(initiator.session_key(), responder.session_key());
//! ```
//!
//! # Persistence
//!
//! A session can be suspended between operations by exporting
//! [`Session::state`] and later rebuilt with [`Session::restore`]; the
//! restored session proceeds identically. The exported
//! [`SessionState`](crate::SessionState) contains the private scalars and must
//! be protected at rest.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(clippy::doc_markdown, missing_docs, rustdoc::all)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod errors;
mod group;
mod hash;
mod messages;
mod protocol;
mod zkp;


pub use errors::JpakeError;
pub use group::edwards25519::Edwards25519;
pub use group::Group;
pub use hash::{Hash, ProxyHash};
pub use messages::{MessageOne, MessageThree, MessageTwo, ZkpProof};
pub use protocol::{
    CipherSuite, Config, DefaultCipherSuite, Session, SessionState, Stage,
    DEFAULT_SECRET_GENERATION_BYTES, DEFAULT_SESSION_CONFIRMATION_BYTES,
    DEFAULT_SESSION_GENERATION_BYTES,
};
pub use rand_core;
