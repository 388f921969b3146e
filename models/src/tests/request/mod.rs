mod builder;
mod payload;
