// Presentation layer: the session state machine and the view models the
// client renders. Nothing here talks to the model.

pub mod cards;
pub mod handlers;
pub mod map;
pub mod session;
