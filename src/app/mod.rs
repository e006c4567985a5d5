mod actions;
mod render;
mod runtime;
mod state;


pub(crate) use runtime::run;
pub(crate) use state::App;
