mod login;
mod me;
mod register;

pub use login::*;
pub use me::*;
pub use register::*;
