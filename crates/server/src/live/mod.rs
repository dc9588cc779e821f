//! Server-side live board viewer: one session per connected browser.

pub mod poller;
pub mod protocol;
pub mod remote;
pub mod session;

pub use poller::{BoardPoller, PollEvent};
pub use protocol::{ClientMessage, ServerMessage};
pub use remote::{RemoteBoard, RemoteBoards};
pub use session::LiveSession;
