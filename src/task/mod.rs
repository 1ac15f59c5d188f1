pub(crate) mod instance;
pub(crate) mod palette;
pub(crate) mod prompt;
pub(crate) mod symbols;
