mod bootstrap;

pub use bootstrap::{App, Options, bootstrap};
