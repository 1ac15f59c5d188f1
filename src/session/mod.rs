pub(crate) mod batch;
pub(crate) mod generator;
pub(crate) mod output;
pub(crate) mod render_session;
