pub mod colors;
pub mod console;
pub mod logging;
pub mod print;

#[cfg(test)]
pub mod testing;
