mod host;
mod init;
mod input;
mod render;
mod state;
mod step;
mod watchers;

use host::Host;
pub use state::App;
