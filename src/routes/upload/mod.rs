mod add;

pub use add::*;
