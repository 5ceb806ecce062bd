mod parse;
mod read;
