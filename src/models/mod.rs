pub mod invite;

pub use invite::{CallableRequest, CallableResponse, InviteRequest, InviteResult};
