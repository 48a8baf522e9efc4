//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed profile entities used by the HTTP and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `User` and its validated components: the typed profile aggregate.
//! - `ProfileRecord` / `ProfileField`: raw record access for field routes.
//! - `tally_parties` / `winning_party`: election aggregation.
//! - `xml`: explicit XML document rendering.
//! - `Error` / `ErrorCode`: transport-agnostic error envelope.
//! - `ports`: the storage port driven adapters implement.

pub mod error;
pub mod ports;
pub mod record;
pub mod tally;
pub mod trace_id;
pub mod user;
pub mod xml;

pub use self::error::{Error, ErrorCode};
pub use self::record::{PatchError, ProfileField, ProfileRecord, UnknownFieldError};
pub use self::tally::{PartyTally, tally_parties, winning_party};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Address, PoliticalParty, User, UserId, UserValidationError};
