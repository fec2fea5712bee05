pub(crate) mod init;
pub(crate) mod ops;
pub(crate) mod status;
