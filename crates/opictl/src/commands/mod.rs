pub(crate) mod network;
pub(crate) mod storage;
