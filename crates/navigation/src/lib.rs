//! Host-independent routing core for the referral portal: path patterns,
//! the role-guarded route table, the session router and the back/forward
//! history tracker. Nothing here knows about a UI framework.

pub mod history;
pub mod pattern;
pub mod router;
pub mod table;

pub use history::{LocationPrimitive, MemoryLocation, NavigationHistory};
pub use pattern::{normalize_path, RouteParams, RoutePattern};
pub use router::{RouteDecision, SessionRouter, GENERIC_DASHBOARD};
pub use table::{RoleSet, RouteEntry, RouteMatch, RouteTable};
