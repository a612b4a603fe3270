pub mod object;
pub mod refs;
pub mod show;
pub mod status;

pub use object::*;
pub use refs::*;
pub use show::*;
pub use status::*;
