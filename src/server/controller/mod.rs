pub mod auth;
pub mod library;
pub mod publisher;
pub mod title;
pub mod user;

#[cfg(test)]
mod test;
