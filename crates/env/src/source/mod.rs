//! Read-only environment sources.
//!
//! [`EnvAccessor`](crate::EnvAccessor) is generic over [`ReadEnv`], so the same
//! lookup and conversion rules apply to the process environment
//! ([`SystemEnv`]) and to an owned map ([`MemoryEnv`]).
//!
//! ```
//! use envy::{EnvAccessor, MemoryEnv};
//!
//! let env = MemoryEnv::new().with_var("DATABASE_POOL", "16");
//! let accessor = EnvAccessor::new(env);
//!
//! assert_eq!(accessor.get_int("DATABASE_POOL", 10, 32).unwrap(), 16);
//! ```

mod memory;
mod read_env;
mod system;

pub use memory::MemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;
