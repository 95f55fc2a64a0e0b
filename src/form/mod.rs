pub mod models;
pub mod row;
pub mod session;
pub mod state;
pub mod validation;
pub mod view;


pub use models::*;
pub use session::*;
pub use state::*;
pub use validation::*;
pub use view::*;
