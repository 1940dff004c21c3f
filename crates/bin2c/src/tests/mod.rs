mod bounded_grid;
mod property_partition;
mod utils;
