pub mod color;
pub mod consts;
pub mod diff;
pub mod error;
pub mod filters;
pub mod frame;
pub mod io;
pub mod session;
pub mod worker;
