//! Unidirectional state primitives for the presentation layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ CLI / screen
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! View models own a state value and only ever replace it with the output
//! of their reducer. Network calls happen outside the reducer; their
//! results come back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
