mod config;
mod dispatcher;
mod helpers;
mod key_validator;
mod transport;
