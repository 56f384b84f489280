mod parser_error_tests;
mod utils;
