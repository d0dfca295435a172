mod common;
mod composition;
mod filtering;
mod recommendations;
