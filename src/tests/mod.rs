#[macro_use]
mod util;

mod delimiters;
mod vertical_work;
