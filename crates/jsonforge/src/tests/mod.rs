mod corpus;
mod read_good;
