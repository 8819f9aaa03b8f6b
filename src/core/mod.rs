mod change;
mod domain;
mod session;
mod skill;
mod store;
mod summary;
mod surface;
mod sync;

pub use change::*;
pub use domain::*;
pub use session::*;
pub use skill::*;
pub use store::*;
pub use summary::*;
pub use surface::*;
pub use sync::*;
