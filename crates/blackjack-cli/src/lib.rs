pub mod input;
pub mod logging;
pub mod record;
pub mod session;
