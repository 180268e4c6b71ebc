mod career;
mod common;
mod course;
