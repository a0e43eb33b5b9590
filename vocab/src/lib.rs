//! # apvocab
//! > typed ActivityStreams 2.0 vocabulary with lossless json round trips
//!
//! every vocabulary property is a [Slot] of polymorphic [Node]s: decoding picks, for each
//! value, the first shape its [Property] allows which matches, and keeps whatever nothing
//! matched so that serializing gives back the original document.
//!
//! ```
//! let ctx = apvocab::Context::default();
//! let raw = serde_json::json!({
//! 	"type": "Event",
//! 	"name": "Party",
//! 	"to": ["https://example.com/alice", "https://example.com/bob"],
//! 	"x-custom": 42,
//! });
//! let event = ctx.deserialize(&raw).unwrap();
//! assert_eq!(event.to().map(|s| s.len()), Some(2));
//! assert_eq!(ctx.serialize(&event).unwrap(), raw);
//! ```

mod macros;
pub(crate) use macros::accessors;

mod error;
pub use error::{Result, VocabError};

pub mod codec;
pub use codec::{Iri, LangString};

pub mod config;
pub use config::Config;

mod property;
pub use property::{Property, Shape};

pub mod properties;
pub mod types;
pub use types::{Family, VocabType};

mod resolver;
pub use resolver::Resolver;

mod context;
pub use context::Context;

mod endpoints;
pub use endpoints::Endpoints;

mod key;
pub use key::PublicKey;

mod node;
pub use node::Node;

mod slot;
pub use slot::Slot;

mod entity;
pub use entity::Entity;

mod target;
pub use target::{Addressed, PUBLIC};

mod jsonld;
pub use jsonld::LD;
