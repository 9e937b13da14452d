pub mod client;
pub mod progress;
pub mod request;
pub mod response;

pub use client::GenerationClient;
pub use progress::{PROGRESS_MESSAGES, ProgressTicker};
pub use request::{PlanRequest, RequestMessage, build_instruction, build_request, meal_labels};
pub use response::{PLAN_DAYS, extract_text, parse_plan, strip_code_fences, validate_plan};
