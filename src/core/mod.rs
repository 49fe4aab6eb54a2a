pub(crate) mod carpark;
pub(crate) mod min_heap;
pub(crate) mod vehicle;
