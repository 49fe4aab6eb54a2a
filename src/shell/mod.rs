pub(crate) mod command;
pub(crate) mod operator;
pub(crate) mod printer;
