mod persistence;
mod session;

pub use persistence::{export_plan, load_plan};
pub use session::{PlanSession, SessionState};
