// Client side of roadmap generation: the preference form, the session that
// guards and submits it, and the HTTP dispatcher that calls the function.

pub mod collector;
pub mod dispatcher;

pub use collector::{ClientSession, CollectorView, CourseMatchSession, RoadmapForm, SubmitOutcome};
pub use dispatcher::{DispatchError, RoadmapDispatcher};
