pub mod plan;
pub mod state;

pub use plan::{PlanChanges, parse, parse_line};
pub use state::StateMove;
