pub mod apply;
pub mod check;
pub mod new;

pub use apply::{apply, ApplyArgs};
pub use check::{check, CheckArgs};
pub use new::{new, NewArgs};
