pub mod loading;

pub use loading::{load_initial_state, LoadFailure};
