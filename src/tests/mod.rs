pub mod common;

mod routes;
