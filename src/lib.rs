//! Avro phonetic transliteration engine
//!
//! Transliterates Roman-script phonetic input into Bengali (Bangla) script,
//! following the Avro phonetic convention: a data-driven, greedy
//! longest-prefix transducer whose rule table carries context-sensitive
//! sub-rules keyed on neighboring vowel/consonant/punctuation class and
//! exact-literal lookahead/lookbehind.
//!
//! # Usage
//!
//! ```
//! let engine = avro_phonetic::Engine::new();
//! assert_eq!(engine.parse("ami banglay gan gai"), "আমি বাংলায় গান গাই");
//! ```
//!
//! Or, for one-off calls, the process-wide default engine:
//!
//! ```
//! assert_eq!(avro_phonetic::parse("rrittu"), "ঋত্তু");
//! ```
//!
//! The engine is a pure function of its rule table and the input string: no
//! learning, no reverse transliteration, and no handling of input streams —
//! [`Engine::parse`] always operates on a whole string.

pub mod case;
pub mod classify;
pub mod data;
pub mod engine;
pub mod error;

pub use engine::{parse, Engine};
pub use error::EngineError;
