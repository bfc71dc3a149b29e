pub(crate) mod maintenance;
pub(crate) mod serve;
pub(crate) mod shell;
