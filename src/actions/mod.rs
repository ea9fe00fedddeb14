pub mod handlers;
pub mod openapi;
pub mod service;
pub mod types;

pub use handlers::{action_headers, cors, init_routes};
pub use service::TipService;
pub use types::{ActionGetResponse, ActionPostRequest, ActionPostResponse, ActionType};
