pub(crate) mod carpark_error;
pub(crate) mod command_error;
pub(crate) mod empty_queue_error;
