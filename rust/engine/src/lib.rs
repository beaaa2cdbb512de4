//! # highcard-engine: High-Card Duel Core
//!
//! A two-sided card comparison game: each round the player and the computer
//! commit one card, the higher value scores a point, ties score nothing.
//! This crate holds the round state machine and everything it owns; rendering
//! and real-time pacing belong to the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card identity, owner, value and location
//! - [`zones`] - Hand, play area and discard views over the card arena
//! - [`game`] - Round state, score, outcomes and notices
//! - [`rules`] - Value validation and the comparison rule
//! - [`engine`] - [`engine::RoundEngine`], the round lifecycle
//! - [`scheduler`] - Deferred steps and the virtual-time queue
//! - [`policy`] - Opponent card selection
//! - [`deck`] - Seeded value rolls
//! - [`logger`] - JSONL round history
//! - [`errors`] - Error types for the fallible helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use highcard_engine::cards::Owner;
//! use highcard_engine::engine::RoundEngine;
//!
//! let mut engine = RoundEngine::with_seed(42);
//! while !engine.is_game_over() {
//!     let card = engine.hand(Owner::Player).ids()[0];
//!     engine.play_card(card);
//!     engine.run_until_idle();
//! }
//! for notice in engine.drain_notices() {
//!     println!("{}", notice.text);
//! }
//! println!("final: {:?}", engine.score());
//! ```
//!
//! ## Deterministic Values
//!
//! Values and opponent choices come from one seeded ChaCha20 stream, so the
//! same seed and the same player inputs replay the same game.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod policy;
pub mod rules;
pub mod scheduler;
pub mod zones;
