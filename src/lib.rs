pub mod data;
pub mod errors;
mod server;

use std::sync::LazyLock;

pub static CLIENT: LazyLock<reqwest::Client> =
    LazyLock::new(|| reqwest::Client::builder().build().unwrap());
