//! Persisted state - the urls file read at run start and fully rewritten at run end

mod store;

pub use store::{parse_state, read_state, write_state, ParsedState};
