pub mod path_builder;
