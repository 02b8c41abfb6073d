pub mod errors;
pub mod db;
pub mod bus_location;

#[cfg(test)]
mod tests;
